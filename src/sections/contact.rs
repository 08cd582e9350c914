use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::components::icons::{Check, Copy, Github, Linkedin, Mail, MapPin, Phone};
use crate::data::{anchor, profile};

#[component]
pub fn Contact() -> impl IntoView {
    let p = profile();

    view! {
        <section id=anchor::CONTACT class="py-16 px-6 bg-slate-800 text-slate-100 text-center">
            <h2 class="text-3xl font-semibold mb-4">"Get in Touch"</h2>
            <p class="text-lg mb-6">
                "Let's collaborate on cybersecurity, AI/ML research, or autonomous vehicle technologies!"
            </p>

            <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                <a
                    href=format!("mailto:{}", p.email)
                    class="inline-flex items-center px-6 py-2 rounded-md text-sm font-medium bg-white text-gray-900 border border-gray-300 hover:bg-gray-100 transition-colors"
                >
                    <Mail class="w-4 h-4 mr-2" />
                    "Send Email"
                </a>
                <a
                    href=p.linkedin
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center px-6 py-2 rounded-md text-sm font-medium border border-white text-white hover:bg-white hover:text-slate-800 transition-colors"
                >
                    <Linkedin class="w-4 h-4 mr-2" />
                    "LinkedIn"
                </a>
                <a
                    href=p.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center px-6 py-2 rounded-md text-sm font-medium border border-white text-white hover:bg-white hover:text-slate-800 transition-colors"
                >
                    <Github class="w-4 h-4 mr-2" />
                    "GitHub"
                </a>
            </div>

            <div class="mt-6 text-sm text-slate-300 space-y-1">
                <p class="flex items-center justify-center gap-2">
                    <Mail class="w-4 h-4" />
                    {p.email}
                    <CopyEmail email=p.email />
                </p>
                <p class="flex items-center justify-center gap-2">
                    <Phone class="w-4 h-4" />
                    {p.phone}
                </p>
                <p class="flex items-center justify-center gap-2">
                    <MapPin class="w-4 h-4" />
                    {p.location}
                </p>
            </div>
        </section>
    }
}

/// Copies the address to the clipboard and flashes a checkmark for a couple
/// of seconds. Clipboard failures are silent; the mailto link above remains
/// the primary path.
#[component]
fn CopyEmail(email: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let handle_copy = move |_| {
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let promise = clipboard.write_text(email);
            if JsFuture::from(promise).await.is_err() {
                return;
            }
            set_copied.set(true);
            // Reset after 2 seconds
            let cb = wasm_bindgen::closure::Closure::once(move || {
                set_copied.set(false);
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                2000,
            );
            cb.forget();
        });
    };

    view! {
        <button
            on:click=handle_copy
            class="text-slate-400 hover:text-white transition-colors"
            aria-label="Copy email address"
        >
            {move || {
                if copied.get() {
                    view! { <Check class="w-4 h-4 text-green-400" /> }.into_any()
                } else {
                    view! { <Copy class="w-4 h-4" /> }.into_any()
                }
            }}
        </button>
    }
}
