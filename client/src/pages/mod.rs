//! Route-level page components.

pub mod admin;
pub mod auth_callback;
pub mod create_post;
pub mod edit_post;
pub mod home;
pub mod login;
pub mod not_found;
pub mod post;
pub mod register;
pub mod search;
pub mod tag;
