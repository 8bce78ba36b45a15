//! Account registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use thoughts::auth::credentials::{self, REGISTRATION_FAILED, RegisterForm};
use thoughts::routes::guard;

use crate::state::use_app;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let app = use_app();
    let session = app.session;
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let current = session.get();
        if current.loading {
            return;
        }
        if let Some(user) = current.user {
            let target = guard::post_login_destination(&user, None);
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let submit_app = app.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        if let Err(e) = current.validate() {
            submit_app.error(e.user_message(REGISTRATION_FAILED));
            return;
        }
        busy.set(true);
        let app = submit_app.clone();
        leptos::task::spawn_local(async move {
            match credentials::register(&current, &*app.api, &app.store).await {
                Ok(_) => app.success("Account created!"),
                Err(e) => app.error(e.user_message(REGISTRATION_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join the conversation"</p>
                <form class="form" on:submit=on_submit>
                    <input
                        class="input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password (min 6 characters)"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
