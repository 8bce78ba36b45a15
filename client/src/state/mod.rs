//! Shared application state, provided once through Leptos context.
//!
//! DESIGN
//! ======
//! The core `SessionStore` stays the source of truth; a listener mirrors
//! every write into the `session` signal so views re-render. The OAuth
//! handler and bootstrapper are created here, once per page load, so their
//! one-shot latches survive re-renders of the components that use them.

pub mod toast;

use std::sync::Arc;

use leptos::prelude::*;
use thoughts::auth::{AuthBootstrap, OAuthCallback};
use thoughts::net::types::Session;
use thoughts::state::{SessionStore, Theme, ThemeStore};

use crate::net::BrowserBackend;
use crate::util::theme::LocalStorage;
use toast::{ToastKind, ToastQueue};

#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<BrowserBackend>,
    pub store: SessionStore,
    pub session: RwSignal<Session>,
    pub themes: Arc<ThemeStore<LocalStorage>>,
    pub theme: RwSignal<Theme>,
    pub toasts: RwSignal<ToastQueue>,
    pub oauth: Arc<OAuthCallback>,
    pub bootstrap: Arc<AuthBootstrap>,
}

impl AppContext {
    /// Build the stores and wire the session mirror. Call once from `App`.
    pub fn new(api: BrowserBackend) -> Self {
        let store = SessionStore::new();
        let session = RwSignal::new(store.session());
        store.subscribe(move |s| {
            session.try_set(s.clone());
        });

        let themes = ThemeStore::load(LocalStorage);
        let theme = RwSignal::new(themes.theme());

        Self {
            api: Arc::new(api),
            store,
            session,
            themes: Arc::new(themes),
            theme,
            toasts: RwSignal::new(ToastQueue::default()),
            oauth: Arc::new(OAuthCallback::new()),
            bootstrap: Arc::new(AuthBootstrap::new()),
        }
    }

    pub fn toggle_theme(&self) {
        let next = self.themes.toggle();
        crate::util::theme::apply(next);
        self.theme.set(next);
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        toast::show(self.toasts, kind, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
