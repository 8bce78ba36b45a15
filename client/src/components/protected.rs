//! Route guard wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps admin routes. The decision comes from `thoughts::routes::guard`:
//! while the session is still loading only a spinner renders, so a slow
//! identity check never produces a premature login redirect.
//!
//! A guard only redirects for the path it was mounted on. Once the router
//! has moved elsewhere (logout navigates home, then clears the session) a
//! still-pending effect must not pull the browser back to `/login`.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use thoughts::routes::guard;
use thoughts::routes::{Access, GuardDecision};

use crate::state::use_app;
use crate::util::browser;

/// Redirect for `decision`, unless the location already left `mounted_path`.
pub fn pending_redirect(decision: &GuardDecision, mounted_path: &str, current_path: &str) -> Option<String> {
    if mounted_path != current_path {
        return None;
    }
    guard::redirect_target(decision)
}

#[component]
pub fn Protected(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = use_app().session;
    let location = use_location();
    let navigate = use_navigate();

    let mounted_path = location.pathname.get_untracked();

    let decision = Memo::new(move |_| {
        let here = browser::join_location(&location.pathname.get(), &location.search.get());
        guard::decide(&session.get(), access, &here)
    });

    Effect::new(move || {
        let decision = decision.get();
        let current_path = location.pathname.get_untracked();
        if let Some(target) = pending_redirect(&decision, &mounted_path, &current_path) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <Show when=move || decision.get() == GuardDecision::Wait>
                        <div class="page-loading">
                            <div class="spinner" aria-label="Loading"></div>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
