//! Existing post editor.
//!
//! A post that cannot be loaded sends the admin back to the dashboard with
//! an error toast.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use thoughts::content::editor::{self, PostEditor, UPDATE_FAILED};
use thoughts::net::api::ContentApi as _;
use thoughts::routes::guard::ADMIN_PATH;

use crate::components::post_form::PostForm;
use crate::state::use_app;

const LOAD_FAILED: &str = "Failed to load post";

#[component]
pub fn EditPostPage() -> impl IntoView {
    let app = use_app();
    let params = use_params_map();
    let navigate = use_navigate();
    let post_id = move || params.read().get("id").unwrap_or_default();
    let form = RwSignal::new(PostEditor::default());
    let busy = RwSignal::new(false);
    let loading = RwSignal::new(true);

    let load_app = app.clone();
    let load_nav = navigate.clone();
    Effect::new(move || {
        let id = post_id();
        loading.set(true);
        let app = load_app.clone();
        let navigate = load_nav.clone();
        leptos::task::spawn_local(async move {
            match app.api.get_post(&id).await {
                Ok(post) => {
                    form.set(PostEditor::from_post(&post));
                    loading.set(false);
                }
                Err(e) => {
                    tracing::warn!(error = %e, post_id = %id, "edit load failed");
                    app.error(LOAD_FAILED);
                    navigate(ADMIN_PATH, NavigateOptions::default());
                }
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            app.error(e.user_message(UPDATE_FAILED));
            return;
        }
        busy.set(true);
        let id = post_id();
        let app = app.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match editor::update(&current, &id, &*app.api).await {
                Ok(_) => {
                    app.success("Post updated!");
                    navigate(ADMIN_PATH, NavigateOptions::default());
                }
                Err(e) => app.error(e.user_message(UPDATE_FAILED)),
            }
            busy.set(false);
        });
    });

    view! {
        <div class="editor-page">
            <h1>"Edit Post"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <PostForm editor=form busy submit_label="Update Post" on_submit/>
            </Show>
        </div>
    }
}
