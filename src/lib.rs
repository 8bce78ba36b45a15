//! # thoughts
//!
//! Client core for the Express/Thoughts blog. Shared by the `thoughts` CLI
//! and the Leptos browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The REST backend owns all content; this crate owns who-is-signed-in
//! (`state::session`), the one-shot OAuth fragment exchange (`auth::oauth`),
//! startup identity bootstrap (`auth::bootstrap`) and the route guard
//! (`routes::guard`). Everything under `content` is page-level glue: query
//! building, pagination, form validation and optimistic list updates.
//!
//! Backends plug in through the traits in `net::api`. The `native` feature
//! provides a `reqwest` implementation; the browser client supplies its own.

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod net;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use error::ApiError;
