use leptos::prelude::*;

use crate::data::{about_paragraphs, anchor, highlight_cards};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=anchor::ABOUT class="py-16 px-6 md:px-20">
            <h2 class="text-3xl font-semibold mb-6 text-center">"About Me"</h2>
            <div class="max-w-4xl mx-auto">
                {about_paragraphs()
                    .into_iter()
                    .map(|text| {
                        view! { <p class="text-lg leading-relaxed mb-6">{text}</p> }
                    })
                    .collect_view()}

                <div class="grid md:grid-cols-2 gap-6 mt-8">
                    {highlight_cards()
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="bg-slate-50 dark:bg-slate-700 p-6 rounded-xl">
                                    <h3 class="text-xl font-semibold mb-3 text-slate-800 dark:text-slate-100">
                                        {card.title}
                                    </h3>
                                    <ul class="space-y-2 text-slate-600 dark:text-slate-300">
                                        {card.items
                                            .iter()
                                            .map(|item| {
                                                view! { <li>{format!("\u{2022} {item}")}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
