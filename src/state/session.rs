//! Session store: the single source of truth for who is signed in.
//!
//! DESIGN
//! ======
//! One `SessionStore` is constructed at startup and shared by cloning (clones
//! point at the same state). Writes are plain overwrites; there is no
//! sequencing between concurrent `refresh` and `clear_session`, so whichever
//! completes last wins.
//!
//! `loading` starts `true` and is only ever cleared, by the first `refresh`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::net::api::AuthApi;
use crate::net::types::{Session, UserSummary};

type Listener = Box<dyn Fn(&Session) + Send + Sync>;

struct Inner {
    session: RwLock<Session>,
    listeners: RwLock<Vec<Listener>>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// A store in the pre-bootstrap state: no user, `loading = true`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                session: RwLock::new(Session { user: None, loading: true }),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn session(&self) -> Session {
        self.inner.session.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Run `listener` after every write with the new snapshot.
    ///
    /// Listeners must not subscribe from inside a callback.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    /// Identity check against the ambient credential.
    ///
    /// Any failure means "no user". Always clears `loading`. Returns the user
    /// that was stored.
    pub async fn refresh<A: AuthApi>(&self, api: &A) -> Option<UserSummary> {
        let user = match api.me().await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!(error = %e, "identity check found no session");
                None
            }
        };
        tracing::info!(user_id = user.as_ref().map(|u| u.id.as_str()), "session refreshed");
        let stored = user.clone();
        self.write(move |s| {
            s.user = stored;
            s.loading = false;
        });
        user
    }

    /// Overwrite the user after an explicit login, registration or OAuth
    /// exchange. No round-trip.
    pub fn set_session(&self, user: UserSummary) {
        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "session set");
        self.write(move |s| s.user = Some(user));
    }

    /// Ask the backend to end the session, then drop the user locally no
    /// matter what the backend said.
    pub async fn clear_session<A: AuthApi>(&self, api: &A) {
        if let Err(e) = api.logout().await {
            tracing::warn!(error = %e, "logout request failed; clearing local session anyway");
        }
        self.write(|s| s.user = None);
        tracing::info!("session cleared");
    }

    fn write(&self, apply: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.inner.session.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut session);
            session.clone()
        };
        let listeners = self.inner.listeners.read().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&snapshot);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("session", &self.session()).finish_non_exhaustive()
    }
}
