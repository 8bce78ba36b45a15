//! Networking for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` implements the core crate's `AuthApi`/`ContentApi` over
//! `gloo-net` with `credentials: include`, so the backend's session cookie
//! rides along on every call.

pub mod browser;

pub use browser::BrowserBackend;
