//! Native backend over `reqwest`.
//!
//! The ambient credential is the `session_token` cookie kept in the client's
//! cookie jar. Login/register also return the token in the body; it is kept
//! here and sent as a bearer header so a token handed in from outside (the
//! CLI's `--session-token`) works without a cookie.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::api::{self, AuthApi, ContentApi, CountQuery, PostQuery};
use super::types::{
    AuthResponse, Comment, LoginRequest, NewComment, Post, PostCount, PostDraft, PostPatch, RegisterRequest,
    SessionExchange, TagCount, UserSummary,
};
use crate::config::ClientConfig;
use crate::error::ApiError;

pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
    token: RwLock<Option<String>>,
}

impl HttpBackend {
    /// Build a backend with a fresh cookie jar.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { client, config, token: RwLock::new(None) })
    }

    #[must_use]
    pub fn with_token(self, token: Option<String>) -> Self {
        self.set_token(token);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Bearer token from the last login/register, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.client.request(method, url);
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }

    async fn json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = Self::send(builder).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn empty(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::send(builder).await.map(|_| ())
    }

    fn remember(&self, resp: AuthResponse) -> AuthResponse {
        if resp.token.is_some() {
            self.set_token(resp.token.clone());
        }
        resp
    }
}

impl AuthApi for HttpBackend {
    async fn me(&self) -> Result<UserSummary, ApiError> {
        Self::json(self.request(Method::GET, api::ME)).await
    }

    async fn exchange_session(&self, session_id: &str) -> Result<UserSummary, ApiError> {
        let body = SessionExchange { session_id: session_id.to_owned() };
        Self::json(self.request(Method::POST, api::SESSION).json(&body)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let resp = Self::json(self.request(Method::POST, api::LOGIN).json(request)).await?;
        Ok(self.remember(resp))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let resp = Self::json(self.request(Method::POST, api::REGISTER).json(request)).await?;
        Ok(self.remember(resp))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let result = Self::empty(self.request(Method::POST, api::LOGOUT)).await;
        self.set_token(None);
        result
    }
}

impl ContentApi for HttpBackend {
    async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
        Self::json(self.request(Method::GET, api::POSTS).query(&query.pairs())).await
    }

    async fn count_posts(&self, query: &CountQuery) -> Result<u64, ApiError> {
        let count: PostCount = Self::json(self.request(Method::GET, api::POSTS_COUNT).query(&query.pairs())).await?;
        Ok(count.count)
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, ApiError> {
        Self::json(self.request(Method::GET, &api::post_path(post_id))).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        Self::json(self.request(Method::POST, api::POSTS).json(draft)).await
    }

    async fn update_post(&self, post_id: &str, patch: &PostPatch) -> Result<Post, ApiError> {
        Self::json(self.request(Method::PUT, &api::post_path(post_id)).json(patch)).await
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), ApiError> {
        Self::empty(self.request(Method::DELETE, &api::post_path(post_id))).await
    }

    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        Self::json(self.request(Method::GET, &api::comments_path(post_id))).await
    }

    async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment, ApiError> {
        Self::json(self.request(Method::POST, &api::comments_path(post_id)).json(comment)).await
    }

    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<(), ApiError> {
        Self::empty(self.request(Method::DELETE, &api::comment_path(post_id, comment_id))).await
    }

    async fn list_tags(&self) -> Result<Vec<TagCount>, ApiError> {
        Self::json(self.request(Method::GET, api::TAGS)).await
    }
}
