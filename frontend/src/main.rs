use log::info;
use yew::prelude::*;

mod analytics;
mod booking;
mod carousel;
mod config;
mod viewport;
mod components {
    pub mod modal;
    pub mod nav;
    pub mod slider;
    pub mod tabs;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
