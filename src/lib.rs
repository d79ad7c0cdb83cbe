//! # pulseboard
//!
//! Leptos + WASM analytics dashboard. The weather, news and finance widgets
//! sit behind a client-side session: a signed-in flag mirrored into
//! `localStorage`, a provider that owns login/register/logout, and a route
//! guard that keeps protected pages away from signed-out visitors.
//!
//! The session rules (`state`, `guard`, `routes`) are plain Rust and tested
//! off-browser. Browser glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let config = config::AppConfig::from_build_env();
    util::logging::init(config.log_level);
    log::debug!("starting with {config:?}");
    leptos::mount::mount_to_body(app::App);
}
