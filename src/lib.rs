//! Smart Saver AI - marketing site
//!
//! Landing page for the Smart Saver AI price comparison bots, rendered on
//! the server with Leptos and hydrated in the browser via WebAssembly.

#![recursion_limit = "1024"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
