//! Reusable view components.

pub mod comment_section;
pub mod layout;
pub mod post_card;
pub mod post_form;
pub mod protected;
pub mod tag_cloud;
pub mod toaster;
