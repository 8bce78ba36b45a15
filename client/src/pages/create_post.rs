//! New post editor.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use thoughts::content::editor::{self, CREATE_FAILED, PostEditor};
use thoughts::routes::guard::ADMIN_PATH;

use crate::components::post_form::PostForm;
use crate::state::use_app;

#[component]
pub fn CreatePostPage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let form = RwSignal::new(PostEditor::default());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            app.error(e.user_message(CREATE_FAILED));
            return;
        }
        busy.set(true);
        let app = app.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match editor::create(&current, &*app.api).await {
                Ok(_) => {
                    app.success("Post created!");
                    navigate(ADMIN_PATH, NavigateOptions::default());
                }
                Err(e) => app.error(e.user_message(CREATE_FAILED)),
            }
            busy.set(false);
        });
    });

    view! {
        <div class="editor-page">
            <h1>"Create New Post"</h1>
            <PostForm editor=form busy submit_label="Create Post" on_submit/>
        </div>
    }
}
