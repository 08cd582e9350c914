use leptos::prelude::*;

#[component]
pub fn ProjectCard(title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-slate-700 p-6 rounded-2xl shadow-md hover:shadow-lg border border-slate-200 dark:border-slate-600 transition-shadow">
            <h3 class="text-xl font-semibold mb-3 text-slate-800 dark:text-slate-100">{title}</h3>
            <p class="text-slate-600 dark:text-slate-300 text-sm leading-relaxed">{desc}</p>
        </div>
    }
}
