use yew::prelude::*;
use log::{error, info, warn};

mod config;
mod content;
mod state;
mod viewport;
mod components {
    pub mod navbar;
    pub mod scroll_top;
}
mod sections {
    pub mod hero;
    pub mod problem_solution;
    pub mod services;
    pub mod portfolio;
    pub mod testimonials;
    pub mod faq;
    pub mod cta;
    pub mod footer;
}

use components::{navbar::Navbar, scroll_top::ScrollTopButton};
use config::{FaqConfig, ScrollThresholds, SCROLL_THROTTLE_MS};
use sections::{
    cta::Cta,
    faq::Faq,
    footer::Footer,
    hero::Hero,
    portfolio::Portfolio,
    problem_solution::ProblemSolution,
    services::Services,
    testimonials::Testimonials,
};
use state::{UiAction, UiState};
use viewport::ScrollSubscription;

#[function_component(App)]
fn app() -> Html {
    let ui = use_reducer_eq(|| {
        UiState::new(content::FAQS.len(), FaqConfig::default(), ScrollThresholds::default())
    });

    // One scroll listener for the whole page, released on unmount.
    {
        let ui = ui.clone();
        use_effect_with_deps(move |_| {
            let subscription = match ScrollSubscription::acquire(SCROLL_THROTTLE_MS, move |offset| {
                ui.dispatch(UiAction::Scrolled(offset));
            }) {
                Ok(subscription) => Some(subscription),
                Err(e) => {
                    warn!("Scroll tracking disabled: {}", e);
                    None
                }
            };
            move || drop(subscription)
        }, ());
    }

    let toggle_nav = {
        let ui = ui.clone();
        Callback::from(move |_: ()| ui.dispatch(UiAction::ToggleNav))
    };

    let close_nav = {
        let ui = ui.clone();
        Callback::from(move |_: ()| ui.dispatch(UiAction::CloseNav))
    };

    let toggle_faq = {
        let ui = ui.clone();
        Callback::from(move |index: usize| ui.dispatch(UiAction::ToggleFaq(index)))
    };

    let scroll_to_top = Callback::from(|_: ()| {
        if let Err(e) = viewport::scroll_to_top() {
            error!("Scroll to top failed: {}", e);
        }
    });

    html! {
        <div class="site">
            <Navbar
                scrolled={ui.nav_scrolled()}
                expanded={ui.nav_expanded()}
                on_toggle={toggle_nav}
                on_close={close_nav}
            />

            <main>
                <Hero />
                <ProblemSolution />
                <Services />
                <Portfolio />
                <Testimonials />
                <Faq
                    entries={content::FAQS}
                    accordion={ui.faq().clone()}
                    on_toggle={toggle_faq}
                />
                <Cta />
            </main>

            <Footer />

            <ScrollTopButton visible={ui.scroll_top_visible()} on_click={scroll_to_top} />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
