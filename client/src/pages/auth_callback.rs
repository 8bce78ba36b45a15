//! OAuth landing screen.
//!
//! Shown instead of the router when the page loads with `#session_id=`.
//! The exchange and the final `/admin` navigation are owned by the
//! context's `OAuthCallback`, so re-rendering this view cannot start a
//! second exchange.

use leptos::prelude::*;
use thoughts::auth::oauth::OAuthOutcome;

use crate::state::use_app;
use crate::util::browser::BrowserNavigator;

#[component]
pub fn AuthCallbackPage(fragment: String) -> impl IntoView {
    let app = use_app();

    leptos::task::spawn_local(async move {
        let outcome = app.oauth.handle(&fragment, &*app.api, &app.store, &BrowserNavigator).await;
        match outcome {
            OAuthOutcome::SignedIn(user) => app.success(format!("Welcome, {}!", user.name)),
            OAuthOutcome::Failed(_) => app.error("Sign-in failed. Please try again."),
            OAuthOutcome::Skipped => {}
        }
    });

    view! {
        <div class="page-loading">
            <div class="spinner" aria-label="Signing in"></div>
            <p>"Signing you in..."</p>
        </div>
    }
}
