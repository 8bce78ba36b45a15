//! Page-level helpers for the content views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page views call the backend directly and keep their own lists. These
//! modules hold the parts worth testing away from the UI: listing queries
//! and pagination (`feed`), the post editor (`editor`), comment threads
//! (`comments`), the admin post table (`admin`) and display formatting
//! (`display`).

pub mod admin;
pub mod comments;
pub mod display;
pub mod editor;
pub mod feed;
