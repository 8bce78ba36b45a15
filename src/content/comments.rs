//! Post page data and the comment thread under it.
//!
//! Mutations are applied to the local list as soon as the backend accepts
//! them; the page never refetches.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::error::ApiError;
use crate::net::api::ContentApi;
use crate::net::types::{Comment, NewComment, Post};

pub const POST_NOT_FOUND: &str = "Post not found";
pub const POST_LOAD_FAILED: &str = "Error loading post";
pub const COMMENT_FIELDS_REQUIRED: &str = "Please fill in all fields";
pub const COMMENT_ADD_FAILED: &str = "Failed to add comment";
pub const COMMENT_DELETE_FAILED: &str = "Failed to delete comment";
pub const COMMENT_DELETE_CONFIRM: &str = "Delete this comment?";

/// Message for a failed post load: 404 is "not found", anything else is a
/// generic load error.
#[must_use]
pub fn post_load_message(err: &ApiError) -> &'static str {
    if err.is_not_found() { POST_NOT_FOUND } else { POST_LOAD_FAILED }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub author_name: String,
    pub content: String,
}

impl CommentForm {
    /// # Errors
    ///
    /// `ApiError::Invalid` when either field is blank.
    pub fn validate(&self) -> Result<NewComment, ApiError> {
        let author_name = self.author_name.trim();
        let content = self.content.trim();
        if author_name.is_empty() || content.is_empty() {
            return Err(ApiError::Invalid(COMMENT_FIELDS_REQUIRED.to_owned()));
        }
        Ok(NewComment { content: content.to_owned(), author_name: author_name.to_owned(), author_email: None })
    }
}

/// Comments for one post, newest first, plus the displayed count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentThread {
    pub comments: Vec<Comment>,
    pub count: u64,
}

impl CommentThread {
    #[must_use]
    pub fn new(comments: Vec<Comment>, count: u64) -> Self {
        Self { comments, count }
    }

    pub fn added(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
        self.count += 1;
    }

    /// Returns `false` if the comment was not in the list.
    pub fn removed(&mut self, comment_id: &str) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.comment_id != comment_id);
        let gone = self.comments.len() != before;
        if gone {
            self.count = self.count.saturating_sub(1);
        }
        gone
    }
}

/// Fetch a post and its comments together.
///
/// # Errors
///
/// The first backend error; map it with `post_load_message`.
pub async fn load_post<C: ContentApi>(api: &C, post_id: &str) -> Result<(Post, CommentThread), ApiError> {
    let post = api.get_post(post_id).await?;
    let comments = api.list_comments(post_id).await?;
    let count = post.comment_count.max(comments.len() as u64);
    Ok((post, CommentThread::new(comments, count)))
}

/// Validate and post a comment without touching any local thread.
///
/// The browser applies `CommentThread::added` to its live signal once this
/// returns, so a delete that finished meanwhile is not undone.
///
/// # Errors
///
/// Validation or backend error.
pub async fn send_comment<C: ContentApi>(api: &C, post_id: &str, form: &CommentForm) -> Result<Comment, ApiError> {
    let new = form.validate()?;
    api.create_comment(post_id, &new).await
}

/// Delete a comment on the backend only; pair with `CommentThread::removed`.
///
/// # Errors
///
/// Backend error.
pub async fn send_delete<C: ContentApi>(api: &C, post_id: &str, comment_id: &str) -> Result<(), ApiError> {
    api.delete_comment(post_id, comment_id).await
}

/// Validate, post, and prepend to `thread`.
///
/// # Errors
///
/// Validation or backend error; `thread` is untouched.
pub async fn submit<C: ContentApi>(
    api: &C,
    post_id: &str,
    form: &CommentForm,
    thread: &mut CommentThread,
) -> Result<Comment, ApiError> {
    let created = send_comment(api, post_id, form).await?;
    thread.added(created.clone());
    Ok(created)
}

/// Admin-only delete; removes locally on success.
///
/// # Errors
///
/// Backend error; `thread` is untouched.
pub async fn delete<C: ContentApi>(
    api: &C,
    post_id: &str,
    comment_id: &str,
    thread: &mut CommentThread,
) -> Result<(), ApiError> {
    send_delete(api, post_id, comment_id).await?;
    thread.removed(comment_id);
    Ok(())
}
