use leptos::prelude::*;

use crate::data::profile;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-sm text-slate-500 dark:text-slate-400 bg-slate-50 dark:bg-slate-900">
            <p>{format!("\u{00A9} 2026 {}. All rights reserved.", profile().name)}</p>
        </footer>
    }
}
