//! Single post with its comment thread.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thoughts::content::comments::{self, CommentThread};
use thoughts::content::display::{self, DateStyle};
use thoughts::net::types::Post;
use thoughts::routes::AppRoute;

use crate::components::comment_section::CommentSection;
use crate::state::use_app;

#[component]
pub fn PostPage() -> impl IntoView {
    let app = use_app();
    let params = use_params_map();
    let post_id = move || params.read().get("id").unwrap_or_default();

    let post = RwSignal::new(None::<Post>);
    let thread = RwSignal::new(CommentThread::default());
    let error = RwSignal::new(None::<&'static str>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let id = post_id();
        loading.set(true);
        error.set(None);
        let app = app.clone();
        leptos::task::spawn_local(async move {
            match comments::load_post(&*app.api, &id).await {
                Ok((loaded, loaded_thread)) => {
                    thread.set(loaded_thread);
                    post.set(Some(loaded));
                }
                Err(e) => {
                    tracing::warn!(error = %e, post_id = %id, "post load failed");
                    post.set(None);
                    error.set(Some(comments::post_load_message(&e)));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="page-loading"><div class="spinner" aria-label="Loading"></div></div> }
        >
            {move || match (post.get(), error.get()) {
                (Some(post), _) => view! { <PostBody post thread/> }.into_any(),
                (None, message) => {
                    view! {
                        <div class="empty">
                            <h1>{message.unwrap_or(comments::POST_NOT_FOUND)}</h1>
                            <a class="btn btn--primary" href="/">
                                "Back to Home"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}

#[component]
fn PostBody(post: Post, thread: RwSignal<CommentThread>) -> impl IntoView {
    let tags = post
        .tags
        .iter()
        .map(|tag| {
            let href = AppRoute::Tag { tag: tag.clone() }.path();
            view! { <a class="tag" href=href>{display::tag_label(tag)}</a> }
        })
        .collect_view();

    view! {
        <article class="post">
            <a class="post__back" href="/">
                "← Back"
            </a>
            <div class="post__tags">{tags}</div>
            <h1 class="post__title">{post.title.clone()}</h1>
            <div class="post__meta">
                <span class="avatar avatar--small">{display::initial(&post.author_name)}</span>
                <span>{post.author_name.clone()}</span>
                <span>{display::format_date(&post.created_at, DateStyle::Long)}</span>
                <span>{move || display::comment_count_label(thread.get().count)}</span>
            </div>
            <div class="prose post__content" inner_html=post.content_html.clone()></div>
        </article>
        <CommentSection post_id=post.post_id thread/>
    }
}
