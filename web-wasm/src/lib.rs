//! Doctor Finder Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod history;
mod logging;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init_tracing();
    leptos::mount::mount_to_body(app::App);
}
