use leptos::prelude::*;

use crate::data::{anchor, hero_taglines, profile};

#[component]
pub fn Hero() -> impl IntoView {
    let p = profile();
    let (left, right) = hero_taglines();

    view! {
        <section class="relative flex flex-col items-center justify-center py-24 px-6 text-center bg-gradient-to-br from-slate-800 via-slate-700 to-slate-900 text-white overflow-hidden">
            <img
                src=p.portrait
                alt=p.name
                class="w-48 h-48 rounded-full border-4 border-white shadow-2xl object-cover ring-4 ring-white/20 mb-2"
            />

            <p class="text-xl text-white/80 mb-6 mt-4">
                {format!("\u{201C}{}\u{201D}", p.quote)}
            </p>

            // Side-by-side tagline columns
            <div class="flex flex-col sm:flex-row justify-between items-start w-full max-w-6xl mt-8 gap-8">
                <TaglineColumn lines=left />
                <TaglineColumn lines=right />
            </div>

            <p class="mt-8 text-lg font-medium text-white/90">{p.expertise_line}</p>

            <div class="mt-8 flex flex-wrap justify-center gap-4">
                <a
                    href=format!("#{}", anchor::PROJECTS)
                    class="px-6 py-2 rounded-md text-sm font-medium bg-white text-gray-900 border border-gray-300 hover:bg-gray-100 transition-colors"
                >
                    "View Projects"
                </a>
                <a
                    href=format!("mailto:{}", p.email)
                    class="px-6 py-2 rounded-md text-sm font-medium bg-indigo-600 text-white hover:bg-indigo-700 transition-colors"
                >
                    "Contact Me"
                </a>
            </div>
        </section>
    }
}

#[component]
fn TaglineColumn(lines: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="text-left max-w-xs space-y-2">
            {lines
                .into_iter()
                .map(|line| {
                    view! { <p class="text-lg font-medium text-white/90">{line}</p> }
                })
                .collect_view()}
        </div>
    }
}
