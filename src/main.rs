//! Entry point for the estudio-web front-end.
//! Composes the page sections and wires document-wide behavior.

use yew::prelude::*;

mod components;
mod config;
mod storage;
mod swiper;
mod tools_page;
mod utils;

use components::{ContactForm, Hero, Navbar, Portfolio, ProjectCarousel, Reveal, Testimonials};
use tools_page::ToolsSection;

/// Whole-page component. Every section is inert on its own when its
/// content is absent, so the same assembly serves every route.
#[function_component(App)]
fn app() -> Html {
    // document-wide: keep the context menu off images; the handle lives as
    // long as the app does
    use_effect_with((), |_| {
        let listener = utils::suppress_image_context_menu();
        move || drop(listener)
    });

    // first icon pass for the statically rendered markup
    use_effect_with((), |_| {
        swiper::refresh_icons();
    });

    html! {
        <>
            <Navbar />
            <main>
                <Hero />
                <Reveal>
                    <ProjectCarousel cards={components::PROJECT_CARDS.to_vec()} />
                </Reveal>
                <Reveal>
                    <Testimonials />
                </Reveal>
                <Reveal>
                    <Portfolio />
                </Reveal>
                <Reveal>
                    <ToolsSection />
                </Reveal>
                <Reveal>
                    <ContactForm />
                </Reveal>
            </main>
        </>
    }
}

fn main() {
    // detailed panic messages in the browser console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
