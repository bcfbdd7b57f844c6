pub mod app;
pub mod config;
pub mod layout;
pub mod sections;
pub mod shared;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = AppConfig::from_location();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    log::info!("mounting app, initial topic: {:?}", config.topic);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
