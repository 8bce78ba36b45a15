//! Login page: email + password, or Google via the hosted auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! A guard redirect lands here with `?from=<path>`. Once a user is present
//! (either just logged in or already signed in on arrival) the page moves to
//! `post_login_destination`, which only honours internal paths.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use thoughts::auth::Navigator as _;
use thoughts::auth::credentials::{self, LOGIN_FAILED, LoginForm};
use thoughts::auth::oauth::OAUTH_LANDING_PATH;
use thoughts::net::encode;
use thoughts::routes::guard;

use crate::state::use_app;
use crate::util::browser;

pub const OAUTH_PROVIDER_URL: &str = "https://auth.emergentagent.com/";

/// Provider URL that sends the browser back to `<origin>/admin`.
pub fn google_login_url(origin: &str) -> String {
    let landing = format!("{}{OAUTH_LANDING_PATH}", origin.trim_end_matches('/'));
    format!("{OAUTH_PROVIDER_URL}?redirect={}", encode::component(&landing))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let session = app.session;
    let query = use_query_map();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let current = session.get();
        if current.loading {
            return;
        }
        if let Some(user) = current.user {
            let from = query.read_untracked().get("from");
            let target = guard::post_login_destination(&user, from.as_deref());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let submit_app = app.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = LoginForm { email: email.get(), password: password.get() };
        if let Err(e) = form.validate() {
            submit_app.error(e.user_message(LOGIN_FAILED));
            return;
        }
        busy.set(true);
        let app = submit_app.clone();
        leptos::task::spawn_local(async move {
            match credentials::login(&form, &*app.api, &app.store).await {
                Ok(user) => app.success(format!("Welcome back, {}!", user.name)),
                Err(e) => app.error(e.user_message(LOGIN_FAILED)),
            }
            busy.set(false);
        });
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        browser::BrowserNavigator.navigate_full(&google_login_url(&browser::current_origin()));
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                <form class="form" on:submit=on_submit>
                    <input
                        class="input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-card__divider">"or"</div>
                <a class="btn btn--ghost auth-card__google" href=OAUTH_PROVIDER_URL on:click=on_google>
                    "Continue with Google"
                </a>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
