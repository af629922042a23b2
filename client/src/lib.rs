//! # client
//!
//! Leptos + WASM single-page front end: login, signup, and the profile
//! dashboard. All session behavior comes from the `session` crate; this crate
//! supplies the browser transport (`gloo-net`), `localStorage` persistence,
//! and the views.
//!
//! Browser-only code is gated on the `csr` feature so the crate still builds
//! and tests natively.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
