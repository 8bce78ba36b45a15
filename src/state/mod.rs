//! Client-side stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both stores are explicit objects created once at startup and handed to
//! whoever needs them (Leptos context in the browser, plain ownership in the
//! CLI). Neither is a module-level global.

pub mod session;
pub mod theme;

pub use session::SessionStore;
pub use theme::{Theme, ThemeStore};
