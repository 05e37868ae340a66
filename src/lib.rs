//! # pinboard
//!
//! Leptos + WASM frontend for the pinboard dashboard: sidebar sections, the
//! upload dropzone, like/save toggles, the share-to-user popup, and the
//! polling loops that keep the pin feed and the open chat thread current.
//!
//! The JSON API is served by an external backend; this crate only consumes
//! it. Browser-only behavior is gated behind the `hydrate` feature, and the
//! state/wire modules stay plain Rust so they can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
