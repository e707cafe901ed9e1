//! jobdeck — client-side job-board web application.
//!
//! A Leptos (WASM) presentation layer over an external REST backend:
//! pages fetch on mount, store responses in local signals, and render
//! lists and forms. All business rules (auth, lifecycle transitions,
//! search) live server-side; see `net::api` for the consumed surface.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
