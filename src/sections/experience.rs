use leptos::prelude::*;

use crate::data::{anchor, current_roles, previous_roles, skill_categories, Role};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=anchor::ACHIEVEMENTS class="py-16 px-6 md:px-20">
            <h2 class="text-3xl font-semibold mb-8 text-center">"Professional Experience"</h2>
            <div class="max-w-5xl mx-auto space-y-8">
                <RoleGroup title="Current Positions" roles=current_roles() />
                <RoleGroup title="Previous Experience" roles=previous_roles() />
                <ExpertiseGrid />
            </div>
        </section>
    }
}

#[component]
fn RoleGroup(title: &'static str, roles: Vec<Role>) -> impl IntoView {
    view! {
        <div class="bg-slate-50 dark:bg-slate-700 p-6 rounded-xl">
            <h3 class="text-xl font-semibold mb-4 text-slate-800 dark:text-slate-100">{title}</h3>
            <div class="space-y-6">
                {roles
                    .into_iter()
                    .map(|role| {
                        view! {
                            <div class=role.accent.class()>
                                <h4 class="font-semibold text-slate-700 dark:text-slate-200">
                                    {role.title}
                                </h4>
                                <p class="text-sm text-slate-600 dark:text-slate-400">
                                    {format!("{} | {}", role.org, role.period)}
                                </p>
                                <ul class="mt-2 space-y-1 text-sm text-slate-600 dark:text-slate-300">
                                    {role.highlights
                                        .iter()
                                        .map(|h| view! { <li>{format!("\u{2022} {h}")}</li> })
                                        .collect_view()}
                                    {(!role.technologies.is_empty())
                                        .then(|| {
                                            view! {
                                                <li>
                                                    "\u{2022} "
                                                    <strong>"Technologies: "</strong>
                                                    {role.technologies}
                                                </li>
                                            }
                                        })}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ExpertiseGrid() -> impl IntoView {
    view! {
        <div class="mt-8 bg-slate-50 dark:bg-slate-700 p-6 rounded-xl">
            <h3 class="text-xl font-semibold mb-4 text-slate-800 dark:text-slate-100">
                "Technical Expertise"
            </h3>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4 text-sm">
                {skill_categories()
                    .into_iter()
                    .map(|cat| {
                        view! {
                            <div>
                                <h4 class="font-semibold text-slate-700 dark:text-slate-200 mb-2">
                                    {cat.name}
                                </h4>
                                <p class="text-slate-600 dark:text-slate-300">{cat.skills}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
