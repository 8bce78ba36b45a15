//! # thoughts-client
//!
//! Leptos browser client for the Express/Thoughts blog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session, OAuth, guard and content rules live in the `thoughts` core crate.
//! This crate adds the `gloo-net` backend (`net`), reactive app context
//! (`state`), browser glue (`util`) and the views (`components`, `pages`).
//!
//! Build for the browser with the `csr` feature (e.g. `trunk serve
//! --features csr`). Without it the crate still compiles natively so its
//! pure helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
