use yew::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod hooks;
pub mod common;
pub mod settings;

use components::layout::layout::Layout;
use pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Layout title="Station Insight">
            <Home />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Station Insight Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
