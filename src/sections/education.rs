use leptos::prelude::*;

use crate::data::{certifications, degrees};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section class="py-16 px-6 md:px-20 bg-slate-100 dark:bg-slate-800">
            <h2 class="text-3xl font-semibold mb-8 text-center">"Education & Certifications"</h2>
            <div class="max-w-4xl mx-auto">
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="bg-white dark:bg-slate-700 p-6 rounded-xl border border-slate-200 dark:border-slate-600">
                        <h3 class="text-xl font-semibold mb-4 text-slate-800 dark:text-slate-100">
                            "Education"
                        </h3>
                        <div class="space-y-4">
                            {degrees()
                                .into_iter()
                                .map(|degree| {
                                    view! {
                                        <div>
                                            <h4 class="font-semibold text-slate-700 dark:text-slate-200">
                                                {degree.title}
                                            </h4>
                                            <p class="text-slate-600 dark:text-slate-300">
                                                {degree.school}
                                            </p>
                                            <p class="text-sm text-slate-500 dark:text-slate-400">
                                                {degree.period}
                                            </p>
                                            <p class="text-sm text-slate-600 dark:text-slate-300 mt-2">
                                                {degree.coursework}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="bg-white dark:bg-slate-700 p-6 rounded-xl border border-slate-200 dark:border-slate-600">
                        <h3 class="text-xl font-semibold mb-4 text-slate-800 dark:text-slate-100">
                            "Certifications"
                        </h3>
                        <div class="space-y-3">
                            {certifications()
                                .into_iter()
                                .map(|group| {
                                    view! {
                                        <div class="flex items-start space-x-3">
                                            <span class=group.marker_class>{group.marker}</span>
                                            <div>
                                                <p class="font-medium text-slate-700 dark:text-slate-200">
                                                    {group.title}
                                                </p>
                                                <p class="text-sm text-slate-600 dark:text-slate-300">
                                                    {group.detail}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
