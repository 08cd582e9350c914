use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::data::{anchor, projects};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=anchor::PROJECTS class="py-16 px-6 md:px-20 bg-slate-100 dark:bg-slate-800">
            <h2 class="text-3xl font-semibold mb-10 text-center">"Featured Projects"</h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {projects()
                    .into_iter()
                    .map(|p| view! { <ProjectCard title=p.title desc=p.desc /> })
                    .collect_view()}
            </div>
        </section>
    }
}
