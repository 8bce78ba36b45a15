//! Browser glue shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here behind the `csr` feature,
//! with native no-op fallbacks, so views stay free of DOM plumbing.

pub mod browser;
pub mod markdown;
pub mod theme;
