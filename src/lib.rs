pub mod components;
pub mod data;
pub mod sections;
pub mod state;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use sections::about::About;
use sections::contact::Contact;
use sections::education::Education;
use sections::experience::Experience;
use sections::hero::Hero;
use sections::projects::Projects;
use state::ThemeMode;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One theme flag per page load; every palette-dependent class below the
    // root derives from it, so the whole page flips in a single render pass.
    let theme = RwSignal::new(ThemeMode::default());

    view! {
        <Title text="A K M Sazzadul Alam" />
        <div class=move || theme.get().scope_class()>
            <div class=move || theme.get().surface_class()>
                <Navbar theme=theme />
                <Hero />
                <About />
                <Projects />
                <Experience />
                <Education />
                <Contact />
                <Footer />
            </div>
        </div>
    }
}
