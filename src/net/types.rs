//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! Content types (`Post`, `Comment`, `TagCount`) are pass-through: the client
//! only adds serde defaults for optional fields it displays. `UserSummary` is
//! the one type the client reasons about, and it is always replaced whole.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity snapshot returned by `/auth/me`, `/auth/session`, login and register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Backend user id. The API calls this `user_id`.
    #[serde(alias = "user_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Avatar URL from the OAuth provider, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Who is signed in, plus whether the startup identity check is still pending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserSummary>,
    pub loading: bool,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of login and register.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: UserSummary,
    /// Bearer token mirroring the session cookie.
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionExchange {
    pub session_id: String,
}

/// A blog post as served by `/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Server-rendered, sanitised HTML for `content`.
    #[serde(default)]
    pub content_html: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub comment_count: u64,
}

fn default_published() -> bool {
    true
}

/// Body of `POST /posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
}

/// Body of `PUT /posts/:id`. Absent fields are left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl PostPatch {
    /// Patch that only flips the published flag.
    #[must_use]
    pub fn published(published: bool) -> Self {
        Self { published: Some(published), ..Self::default() }
    }
}

impl From<PostDraft> for PostPatch {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: Some(draft.title),
            content: Some(draft.content),
            preview: draft.preview,
            tags: Some(draft.tags),
            published: Some(draft.published),
        }
    }
}

/// A reader comment on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: String,
    pub post_id: String,
    pub content: String,
    pub author_name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /posts/:id/comments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub content: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
}

/// One entry of `GET /tags`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

/// Response of `GET /posts/count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCount {
    pub count: u64,
}
