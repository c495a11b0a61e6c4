//! Checkout Web Frontend
//!
//! Leptos-based WASM frontend hosting the subscription checkout page.

mod api;
mod app;
mod auth;
mod components;
mod dom;
mod logging;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}
