//! Backend seams and REST endpoint paths.
//!
//! ARCHITECTURE
//! ============
//! `AuthApi` covers the five identity endpoints the session logic depends on;
//! `ContentApi` is the CRUD surface used by page views. Keeping them apart
//! lets the session/OAuth code be tested against a tiny in-memory fake.
//!
//! Methods are `async fn` without a `Send` bound: the browser backend's
//! futures are `!Send`, and nothing here is spawned onto a thread pool.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::encode;
use super::types::{
    AuthResponse, Comment, LoginRequest, NewComment, Post, PostDraft, PostPatch, RegisterRequest, TagCount,
    UserSummary,
};
use crate::error::ApiError;

pub const ME: &str = "/auth/me";
pub const SESSION: &str = "/auth/session";
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const LOGOUT: &str = "/auth/logout";
pub const POSTS: &str = "/posts";
pub const POSTS_COUNT: &str = "/posts/count";
pub const TAGS: &str = "/tags";

#[must_use]
pub fn post_path(post_id: &str) -> String {
    format!("{POSTS}/{}", encode::segment(post_id))
}

#[must_use]
pub fn comments_path(post_id: &str) -> String {
    format!("{}/comments", post_path(post_id))
}

#[must_use]
pub fn comment_path(post_id: &str, comment_id: &str) -> String {
    format!("{}/{}", comments_path(post_id), encode::segment(comment_id))
}

/// Filters for `GET /posts`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub tag: Option<String>,
    pub search: Option<String>,
    /// Ask for drafts too; the backend honours it for admins only.
    pub include_unpublished: bool,
}

impl PostQuery {
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        Self { page: Some(page), limit: Some(limit), ..Self::default() }
    }

    #[must_use]
    pub fn tagged(tag: &str, limit: u32) -> Self {
        Self { tag: Some(tag.to_owned()), limit: Some(limit), ..Self::default() }
    }

    #[must_use]
    pub fn search(term: &str, limit: u32) -> Self {
        Self { search: Some(term.to_owned()), limit: Some(limit), ..Self::default() }
    }

    #[must_use]
    pub fn with_drafts(limit: u32) -> Self {
        Self { limit: Some(limit), include_unpublished: true, ..Self::default() }
    }

    /// Query pairs in a stable order, omitting unset filters.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if self.include_unpublished {
            pairs.push(("include_unpublished", "true".to_owned()));
        }
        pairs
    }
}

/// Filters for `GET /posts/count`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountQuery {
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl CountQuery {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// Identity endpoints. Every call carries the ambient credential.
pub trait AuthApi {
    /// `GET /auth/me`.
    async fn me(&self) -> Result<UserSummary, ApiError>;
    /// `POST /auth/session` with the provider's one-time session id.
    async fn exchange_session(&self, session_id: &str) -> Result<UserSummary, ApiError>;
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Post, comment and tag endpoints.
pub trait ContentApi {
    async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError>;
    async fn count_posts(&self, query: &CountQuery) -> Result<u64, ApiError>;
    async fn get_post(&self, post_id: &str) -> Result<Post, ApiError>;
    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError>;
    async fn update_post(&self, post_id: &str, patch: &PostPatch) -> Result<Post, ApiError>;
    async fn delete_post(&self, post_id: &str) -> Result<(), ApiError>;
    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError>;
    async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment, ApiError>;
    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<(), ApiError>;
    async fn list_tags(&self) -> Result<Vec<TagCount>, ApiError>;
}
