//! Sticky header with the theme toggle and the collapsible mobile menu.

use leptos::prelude::*;

use crate::components::icons::{Menu, Moon, Sun, X};
use crate::data::{nav_links, profile};
use crate::state::{MenuVisibility, ThemeMode};

#[component]
pub fn Navbar(theme: RwSignal<ThemeMode>) -> impl IntoView {
    let (menu, set_menu) = signal(MenuVisibility::Closed);

    view! {
        <nav class="flex justify-between items-center px-6 md:px-20 py-4 shadow-sm bg-white/90 dark:bg-slate-800/90 backdrop-blur sticky top-0 z-50 border-b border-slate-200 dark:border-slate-700">
            <h1 class="text-2xl font-bold text-slate-700 dark:text-slate-200">
                {profile().name}
            </h1>

            // Desktop menu
            <div class="hidden md:flex items-center gap-6">
                <NavLinks set_menu=set_menu />
                <ThemeToggle theme=theme />
            </div>

            // Mobile menu button
            <button
                on:click=move |_| set_menu.update(|m| *m = m.toggled())
                class="md:hidden p-2 border rounded-lg border-gray-300 dark:border-gray-700"
                aria-label="Toggle navigation menu"
                aria-expanded=move || menu.get().is_open().to_string()
                aria-controls="mobile-menu"
            >
                {move || {
                    if menu.get().is_open() {
                        view! { <X class="w-5 h-5" /> }.into_any()
                    } else {
                        view! { <Menu class="w-5 h-5" /> }.into_any()
                    }
                }}
            </button>
        </nav>

        // Mobile menu dropdown
        <Show when=move || menu.get().is_open()>
            <div
                id="mobile-menu"
                class="flex flex-col items-center gap-4 md:hidden bg-white dark:bg-gray-800 py-4 border-t border-gray-200 dark:border-gray-700"
            >
                <NavLinks set_menu=set_menu />
                <ThemeToggle theme=theme />
            </div>
        </Show>
    }
}

/// Anchor links rendered by both menu layouts. Activating a link always
/// forces the mobile menu closed, so following a link on a narrow layout
/// never leaves the dropdown open.
#[component]
fn NavLinks(set_menu: WriteSignal<MenuVisibility>) -> impl IntoView {
    nav_links()
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href()
                    class="hover:text-slate-600 dark:hover:text-slate-300 transition-colors"
                    on:click=move |_| set_menu.set(MenuVisibility::Closed)
                >
                    {link.label}
                </a>
            }
        })
        .collect_view()
}

#[component]
fn ThemeToggle(theme: RwSignal<ThemeMode>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| theme.update(|t| *t = t.toggled())
            class="p-2 rounded-full border border-gray-300 dark:border-gray-700 hover:bg-gray-200 dark:hover:bg-gray-700"
            aria-label="Toggle dark mode"
        >
            {move || {
                if theme.get().is_dark() {
                    view! { <Sun class="w-[18px] h-[18px]" /> }.into_any()
                } else {
                    view! { <Moon class="w-[18px] h-[18px]" /> }.into_any()
                }
            }}
        </button>
    }
}
