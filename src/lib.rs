//! # insight-client
//!
//! Leptos + WASM frontend for the Insight BI predictive-analytics dashboard.
//! All intelligence (prediction models, chat responses, user persistence)
//! lives behind an external HTTP API; this crate is the browser client that
//! authenticates, renders the widget dashboard, and issues bearer-token
//! requests against it.
//!
//! This crate contains pages, widget components, session state, the typed
//! API client, and browser-storage utilities.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
