//! `fetch`-based backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with `ApiError::Network`, since there is
//! no `fetch` to call. Pages never run natively; the stubs only keep the
//! crate compiling for unit tests.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `Network`, non-2xx responses go through
//! `ApiError::from_response`, bad bodies map to `Decode`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thoughts::ApiError;
use thoughts::config::ClientConfig;
use thoughts::net::api::{self, AuthApi, ContentApi, CountQuery, PostQuery};
use thoughts::net::encode;
use thoughts::net::types::{
    AuthResponse, Comment, LoginRequest, NewComment, Post, PostCount, PostDraft, PostPatch, RegisterRequest,
    SessionExchange, TagCount, UserSummary,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

pub struct BrowserBackend {
    config: ClientConfig,
    token: RwLock<Option<String>>,
}

impl BrowserBackend {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config, token: RwLock::new(None) }
    }

    /// Backend origin baked in at build time via `THOUGHTS_BACKEND_URL`;
    /// same-origin when unset.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(ClientConfig::new(option_env!("THOUGHTS_BACKEND_URL").unwrap_or_default()))
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        format!("{}{}", self.config.endpoint(path), encode::query_string(query))
    }

    fn remember(&self, resp: AuthResponse) -> AuthResponse {
        if resp.token.is_some() {
            self.set_token(resp.token.clone());
        }
        resp
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T, ApiError> {
        let resp = self.send(Verb::Get, &self.url(path, query), None).await?;
        decode(resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(&self, verb: Verb, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Invalid(e.to_string()))?;
        let resp = self.send(verb, &self.url(path, &[]), Some(body)).await?;
        decode(resp).await
    }

    async fn send_empty(&self, verb: Verb, path: &str) -> Result<(), ApiError> {
        self.send(verb, &self.url(path, &[]), None).await.map(|_| ())
    }
}

#[cfg(feature = "csr")]
type RawResponse = gloo_net::http::Response;

#[cfg(not(feature = "csr"))]
type RawResponse = ();

#[cfg(feature = "csr")]
impl BrowserBackend {
    async fn send(&self, verb: Verb, url: &str, body: Option<serde_json::Value>) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;

        tracing::debug!(?verb, %url, "api request");
        let builder = match verb {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        let builder = match self.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };
        let sent = match body {
            Some(body) => builder.json(&body).map_err(|e| ApiError::Invalid(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(resp.status(), &body))
    }
}

#[cfg(not(feature = "csr"))]
impl BrowserBackend {
    async fn send(&self, verb: Verb, url: &str, body: Option<serde_json::Value>) -> Result<RawResponse, ApiError> {
        let _ = (verb, url, body, self.token());
        Err(unavailable())
    }
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(resp: RawResponse) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn decode<T: DeserializeOwned>(resp: RawResponse) -> Result<T, ApiError> {
    let () = resp;
    Err(unavailable())
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable() -> ApiError {
    ApiError::Network("fetch is only available in the browser".to_owned())
}

impl AuthApi for BrowserBackend {
    async fn me(&self) -> Result<UserSummary, ApiError> {
        self.get_json(api::ME, &[]).await
    }

    async fn exchange_session(&self, session_id: &str) -> Result<UserSummary, ApiError> {
        let body = SessionExchange { session_id: session_id.to_owned() };
        self.send_json(Verb::Post, api::SESSION, &body).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let resp = self.send_json(Verb::Post, api::LOGIN, request).await?;
        Ok(self.remember(resp))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let resp = self.send_json(Verb::Post, api::REGISTER, request).await?;
        Ok(self.remember(resp))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let result = self.send_empty(Verb::Post, api::LOGOUT).await;
        self.set_token(None);
        result
    }
}

impl ContentApi for BrowserBackend {
    async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
        self.get_json(api::POSTS, &query.pairs()).await
    }

    async fn count_posts(&self, query: &CountQuery) -> Result<u64, ApiError> {
        let count: PostCount = self.get_json(api::POSTS_COUNT, &query.pairs()).await?;
        Ok(count.count)
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, ApiError> {
        self.get_json(&api::post_path(post_id), &[]).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.send_json(Verb::Post, api::POSTS, draft).await
    }

    async fn update_post(&self, post_id: &str, patch: &PostPatch) -> Result<Post, ApiError> {
        self.send_json(Verb::Put, &api::post_path(post_id), patch).await
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), ApiError> {
        self.send_empty(Verb::Delete, &api::post_path(post_id)).await
    }

    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&api::comments_path(post_id), &[]).await
    }

    async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment, ApiError> {
        self.send_json(Verb::Post, &api::comments_path(post_id), comment).await
    }

    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<(), ApiError> {
        self.send_empty(Verb::Delete, &api::comment_path(post_id, comment_id)).await
    }

    async fn list_tags(&self) -> Result<Vec<TagCount>, ApiError> {
        self.get_json(api::TAGS, &[]).await
    }
}
