//! Networking: wire types, backend traits, and the native HTTP backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the seams, `types` the wire schema, `encode` the URL
//! escaping shared with route building. `http` is the `reqwest` backend used
//! by the CLI and integration tests.

pub mod api;
pub mod encode;
#[cfg(feature = "native")]
pub mod http;
pub mod types;
