//! OAuth redirect handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider sends the browser back to the app root with
//! `#session_id=<opaque>`. The app trades that id for a session cookie via
//! `POST /auth/session` and then always lands on `/admin`, whatever the
//! exchange returned and whatever else the URL carried.
//!
//! DESIGN
//! ======
//! `OAuthCallback` holds an explicit phase:
//!
//! ```text
//! Idle -> Exchanging -> Succeeded | Failed -> Redirected
//! ```
//!
//! The `Idle -> Exchanging` step is a check-and-set under a mutex before the
//! first await, so a second `handle` on the same instance, concurrent or
//! not, returns `Skipped` without touching the network or the navigator.
//! One instance lives for one page load.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use std::sync::{Mutex, PoisonError};

use crate::error::ApiError;
use crate::net::api::AuthApi;
use crate::net::encode;
use crate::net::types::UserSummary;
use crate::state::SessionStore;

/// Fixed post-exchange destination. Never derived from the URL.
pub const OAUTH_LANDING_PATH: &str = "/admin";
pub const SESSION_MARKER: &str = "session_id=";
const SESSION_KEY: &str = "session_id";

/// Full-page navigation (reload), as opposed to a router push.
pub trait Navigator {
    fn navigate_full(&self, path: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthPhase {
    Idle,
    Exchanging,
    Succeeded,
    Failed,
    Redirected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthOutcome {
    /// Not a callback fragment, or this handler already ran.
    Skipped,
    SignedIn(UserSummary),
    Failed(ApiError),
}

/// Whether a URL fragment carries the provider's session marker.
#[must_use]
pub fn is_oauth_callback(fragment: &str) -> bool {
    fragment.contains(SESSION_MARKER)
}

/// Pull `session_id` out of a fragment like `#session_id=abc&x=y`.
///
/// # Errors
///
/// Returns `ApiError::Invalid` when the key is missing or blank.
pub fn extract_session_id(fragment: &str) -> Result<String, ApiError> {
    encode::parse_pairs(fragment)
        .into_iter()
        .find(|(k, _)| k == SESSION_KEY)
        .map(|(_, v)| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Invalid("missing session id".to_owned()))
}

#[derive(Debug)]
pub struct OAuthCallback {
    phase: Mutex<OAuthPhase>,
}

impl OAuthCallback {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: Mutex::new(OAuthPhase::Idle) }
    }

    #[must_use]
    pub fn phase(&self) -> OAuthPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True while the fragment is a callback this instance has not consumed.
    #[must_use]
    pub fn is_pending(&self, fragment: &str) -> bool {
        is_oauth_callback(fragment) && self.phase() == OAuthPhase::Idle
    }

    fn set_phase(&self, phase: OAuthPhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
    }

    /// Claim the latch. Only the first caller gets `true`.
    fn begin(&self) -> bool {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *phase != OAuthPhase::Idle {
            return false;
        }
        *phase = OAuthPhase::Exchanging;
        true
    }

    /// Run the exchange for `fragment`, then navigate to `/admin`.
    ///
    /// On failure the session store is left as it was.
    pub async fn handle<A, N>(&self, fragment: &str, api: &A, session: &SessionStore, nav: &N) -> OAuthOutcome
    where
        A: AuthApi,
        N: Navigator + ?Sized,
    {
        if !is_oauth_callback(fragment) || !self.begin() {
            return OAuthOutcome::Skipped;
        }

        let result = match extract_session_id(fragment) {
            Ok(session_id) => api.exchange_session(&session_id).await,
            Err(e) => Err(e),
        };

        let outcome = match result {
            Ok(user) => {
                session.set_session(user.clone());
                self.set_phase(OAuthPhase::Succeeded);
                tracing::info!(user_id = %user.id, "oauth session exchange succeeded");
                OAuthOutcome::SignedIn(user)
            }
            Err(e) => {
                self.set_phase(OAuthPhase::Failed);
                tracing::warn!(error = %e, "oauth session exchange failed");
                OAuthOutcome::Failed(e)
            }
        };

        nav.navigate_full(OAUTH_LANDING_PATH);
        self.set_phase(OAuthPhase::Redirected);
        outcome
    }
}

impl Default for OAuthCallback {
    fn default() -> Self {
        Self::new()
    }
}
