//! Startup identity check.
//!
//! The first `run` refreshes the session store from the ambient credential.
//! Later calls return immediately, so re-mounting the root component never
//! causes a second `/auth/me`.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::AuthApi;
use crate::state::SessionStore;

#[derive(Debug, Default)]
pub struct AuthBootstrap {
    started: AtomicBool,
}

impl AuthBootstrap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Returns `true` if this call performed the identity check.
    pub async fn run<A: AuthApi>(&self, session: &SessionStore, api: &A) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::debug!("auth bootstrap already ran");
            return false;
        }
        let user = session.refresh(api).await;
        tracing::info!(signed_in = user.is_some(), "auth bootstrap complete");
        true
    }
}
