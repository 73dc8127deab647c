//! # portal-client
//!
//! Leptos + WASM frontend for the account portal: the session reader behind
//! every signed-in view, and the public legal document pages.
//!
//! Data flows through one injectable [`query::cache::ResourceCache`] shared via
//! context; HTTP goes through the [`net::http::HttpClient`] seam so the same
//! state code runs against the browser `fetch` API or a test double.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod query;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
