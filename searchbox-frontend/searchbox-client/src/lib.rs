use leptos::prelude::*;
use searchbox_app::{config::SearchConfig, dom, App};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = SearchConfig::default();
    if dom::markup_present(&config) {
        log::info!("csr mode - binding to page markup");
        if let Err(e) = dom::bind(&config) {
            log::error!("Could not bind the search box: {e}");
        }
    } else {
        log::info!("csr mode - mounting");
        leptos::mount::mount_to_body(move || view! { <App config=config /> });
    }
}
