//! # console
//!
//! Leptos + WASM admin console for a user and file management backend.
//!
//! Session state lives in browser storage and gates every route: protected
//! screens render only with an unexpired session, and the sign-in screen
//! only without one. Pages talk to the REST backend through `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
