//! Admin dashboard post table.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::Serialize;

use super::feed::ADMIN_LIMIT;
use crate::error::ApiError;
use crate::net::api::{ContentApi, PostQuery};
use crate::net::types::{Post, PostPatch};

pub const LOAD_FAILED: &str = "Failed to load posts";
pub const DELETE_FAILED: &str = "Failed to delete post";
pub const UPDATE_FAILED: &str = "Failed to update post";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this post?";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
}

/// Toast text after a publish toggle.
#[must_use]
pub fn publish_message(published: bool) -> &'static str {
    if published { "Post published!" } else { "Post unpublished" }
}

/// Every post, drafts included, as the dashboard keeps it locally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminPosts {
    pub posts: Vec<Post>,
}

impl AdminPosts {
    #[must_use]
    pub fn stats(&self) -> PostStats {
        let published = self.posts.iter().filter(|p| p.published).count();
        PostStats { total: self.posts.len(), published, drafts: self.posts.len() - published }
    }

    #[must_use]
    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.post_id == post_id)
    }

    /// Patch the local copy's flag. Returns `false` if the post is unknown.
    pub fn set_published(&mut self, post_id: &str, published: bool) -> bool {
        match self.posts.iter_mut().find(|p| p.post_id == post_id) {
            Some(post) => {
                post.published = published;
                true
            }
            None => false,
        }
    }

    /// Current flag of a row.
    ///
    /// # Errors
    ///
    /// `ApiError::Invalid` for an unknown id.
    pub fn published_flag(&self, post_id: &str) -> Result<bool, ApiError> {
        self.get(post_id)
            .map(|p| p.published)
            .ok_or_else(|| ApiError::Invalid(format!("unknown post {post_id}")))
    }

    pub fn remove(&mut self, post_id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.post_id != post_id);
        self.posts.len() != before
    }
}

/// # Errors
///
/// Backend error.
pub async fn load<C: ContentApi>(api: &C) -> Result<AdminPosts, ApiError> {
    let posts = api.list_posts(&PostQuery::with_drafts(ADMIN_LIMIT)).await?;
    Ok(AdminPosts { posts })
}

/// Set a post's published flag on the backend only.
///
/// The caller applies `AdminPosts::set_published` to its live table after
/// this returns, so actions on other rows that finished meanwhile survive.
///
/// # Errors
///
/// Backend error.
pub async fn send_published<C: ContentApi>(api: &C, post_id: &str, published: bool) -> Result<(), ApiError> {
    api.update_post(post_id, &PostPatch::published(published)).await?;
    tracing::info!(%post_id, published, "post visibility changed");
    Ok(())
}

/// Delete a post on the backend only; pair with `AdminPosts::remove`.
///
/// # Errors
///
/// Backend error.
pub async fn send_delete<C: ContentApi>(api: &C, post_id: &str) -> Result<(), ApiError> {
    api.delete_post(post_id).await?;
    tracing::info!(%post_id, "post deleted");
    Ok(())
}

/// Flip a post's published flag on the backend, then locally. Returns the
/// new flag.
///
/// # Errors
///
/// `ApiError::Invalid` for an unknown id, otherwise the backend error.
pub async fn toggle_published<C: ContentApi>(api: &C, table: &mut AdminPosts, post_id: &str) -> Result<bool, ApiError> {
    let next = !table.published_flag(post_id)?;
    send_published(api, post_id, next).await?;
    table.set_published(post_id, next);
    Ok(next)
}

/// Delete on the backend, then drop the local row.
///
/// # Errors
///
/// Backend error; the row stays.
pub async fn delete<C: ContentApi>(api: &C, table: &mut AdminPosts, post_id: &str) -> Result<(), ApiError> {
    send_delete(api, post_id).await?;
    table.remove(post_id);
    Ok(())
}
