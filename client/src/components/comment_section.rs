//! Comment list and form under a post.
//!
//! The thread signal is owned by the post page so the header count and the
//! list stay in step. Results are applied to the live signal, never to a
//! copy taken before the request. Deletes are offered to admins only and
//! ask for confirmation first.

use leptos::prelude::*;
use thoughts::content::comments::{
    self, COMMENT_ADD_FAILED, COMMENT_DELETE_CONFIRM, COMMENT_DELETE_FAILED, CommentForm, CommentThread,
};
use thoughts::content::display::{self, DateStyle};

use crate::state::use_app;
use crate::util::browser;

#[component]
pub fn CommentSection(post_id: String, thread: RwSignal<CommentThread>) -> impl IntoView {
    let app = use_app();
    let session = app.session;
    let author = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_app = app.clone();
    let submit_post = post_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = CommentForm { author_name: author.get(), content: content.get() };
        if let Err(e) = form.validate() {
            submit_app.error(e.user_message(COMMENT_ADD_FAILED));
            return;
        }
        busy.set(true);
        let app = submit_app.clone();
        let post_id = submit_post.clone();
        leptos::task::spawn_local(async move {
            match comments::send_comment(&*app.api, &post_id, &form).await {
                Ok(created) => {
                    thread.update(|t| t.added(created));
                    content.set(String::new());
                    app.success("Comment added!");
                }
                Err(e) => app.error(e.user_message(COMMENT_ADD_FAILED)),
            }
            busy.set(false);
        });
    };

    let delete_app = app.clone();
    let on_delete = Callback::new(move |comment_id: String| {
        if !browser::confirm(COMMENT_DELETE_CONFIRM) {
            return;
        }
        let app = delete_app.clone();
        let post_id = post_id.clone();
        leptos::task::spawn_local(async move {
            match comments::send_delete(&*app.api, &post_id, &comment_id).await {
                Ok(()) => {
                    thread.update(|t| {
                        t.removed(&comment_id);
                    });
                    app.success("Comment deleted");
                }
                Err(e) => app.error(e.user_message(COMMENT_DELETE_FAILED)),
            }
        });
    });

    view! {
        <section class="comments">
            <h2 class="comments__title">
                {move || format!("Comments ({})", thread.get().count)}
            </h2>
            <form class="card form comments__form" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <textarea
                    class="input textarea"
                    rows="4"
                    placeholder="Share your thoughts..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Posting..." } else { "Post Comment" }}
                </button>
            </form>
            <Show
                when=move || !thread.get().comments.is_empty()
                fallback=|| view! { <p class="empty">"No comments yet. Be the first to share your thoughts!"</p> }
            >
                <ul class="comments__list">
                    <For
                        each=move || thread.get().comments
                        key=|comment| comment.comment_id.clone()
                        children=move |comment| {
                            let comment_id = comment.comment_id.clone();
                            view! {
                                <li class="card comment">
                                    <div class="comment__head">
                                        <span class="avatar avatar--small">
                                            {display::initial(&comment.author_name)}
                                        </span>
                                        <span class="comment__author">{comment.author_name.clone()}</span>
                                        <span class="comment__date">
                                            {display::format_date(&comment.created_at, DateStyle::WithTime)}
                                        </span>
                                        <Show when=move || session.get().is_admin()>
                                            <button
                                                class="btn btn--ghost btn--danger comment__delete"
                                                aria-label="Delete comment"
                                                on:click={
                                                    let comment_id = comment_id.clone();
                                                    move |_| on_delete.run(comment_id.clone())
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </Show>
                                    </div>
                                    <p class="comment__body">{comment.content}</p>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
