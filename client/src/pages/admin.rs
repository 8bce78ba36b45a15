//! Admin dashboard: stats, post table, publish toggle, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `Protected` with `Access::Admin`. Every action edits the
//! live table signal only after the backend accepts it, and only the row it
//! touched, so overlapping actions on different rows all stick.
//!
//! Logout leaves for `/` before the session is cleared; the guard must not
//! see an anonymous session while this page is still mounted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use thoughts::content::admin::{self, AdminPosts, DELETE_CONFIRM, DELETE_FAILED, LOAD_FAILED, UPDATE_FAILED};
use thoughts::content::display::{self, DateStyle};
use thoughts::net::types::Post;
use thoughts::routes::AppRoute;

use crate::state::use_app;
use crate::util::browser;

#[component]
pub fn AdminPage() -> impl IntoView {
    let app = use_app();
    let session = app.session;
    let navigate = use_navigate();
    let table = RwSignal::new(AdminPosts::default());
    let loading = RwSignal::new(true);

    let load_app = app.clone();
    leptos::task::spawn_local(async move {
        match admin::load(&*load_app.api).await {
            Ok(loaded) => table.set(loaded),
            Err(e) => load_app.error(e.user_message(LOAD_FAILED)),
        }
        loading.set(false);
    });

    let toggle_app = app.clone();
    let on_toggle = Callback::new(move |post_id: String| {
        let app = toggle_app.clone();
        let published = match table.with_untracked(|t| t.published_flag(&post_id)) {
            Ok(current) => !current,
            Err(e) => {
                app.error(e.user_message(UPDATE_FAILED));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match admin::send_published(&*app.api, &post_id, published).await {
                Ok(()) => {
                    table.update(|t| {
                        t.set_published(&post_id, published);
                    });
                    app.success(admin::publish_message(published));
                }
                Err(e) => app.error(e.user_message(UPDATE_FAILED)),
            }
        });
    });

    let delete_app = app.clone();
    let on_delete = Callback::new(move |post_id: String| {
        if !browser::confirm(DELETE_CONFIRM) {
            return;
        }
        let app = delete_app.clone();
        leptos::task::spawn_local(async move {
            match admin::send_delete(&*app.api, &post_id).await {
                Ok(()) => {
                    table.update(|t| {
                        t.remove(&post_id);
                    });
                    app.success("Post deleted");
                }
                Err(e) => app.error(e.user_message(DELETE_FAILED)),
            }
        });
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        navigate(&AppRoute::Home.path(), NavigateOptions::default());
        let app = app.clone();
        leptos::task::spawn_local(async move {
            app.store.clear_session(&*app.api).await;
            app.success("Logged out");
        });
    };

    let stats = move || table.get().stats();

    view! {
        <div class="admin">
            <div class="admin__head">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="admin__welcome">
                        {move || {
                            session.get().user.map(|u| format!("Welcome back, {}", u.name)).unwrap_or_default()
                        }}
                    </p>
                </div>
                <div class="admin__actions">
                    <a class="btn btn--primary" href=AppRoute::AdminCreate.path()>
                        "New Post"
                    </a>
                    <button class="btn btn--ghost" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>

            <div class="stats">
                <div class="card stats__item">
                    <span class="stats__label">"Total Posts"</span>
                    <span class="stats__value">{move || stats().total}</span>
                </div>
                <div class="card stats__item">
                    <span class="stats__label">"Published"</span>
                    <span class="stats__value">{move || stats().published}</span>
                </div>
                <div class="card stats__item">
                    <span class="stats__label">"Drafts"</span>
                    <span class="stats__value">{move || stats().drafts}</span>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <Show
                    when=move || !table.get().posts.is_empty()
                    fallback=|| {
                        view! {
                            <div class="empty">
                                <p>"No posts yet."</p>
                                <a class="btn btn--primary" href="/admin/create">
                                    "Create your first post"
                                </a>
                            </div>
                        }
                    }
                >
                    <table class="admin-table card">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Status"</th>
                                <th>"Comments"</th>
                                <th>"Date"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || table.get().posts
                                key=|post| (post.post_id.clone(), post.published)
                                children=move |post| view! { <AdminRow post on_toggle on_delete/> }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn AdminRow(post: Post, on_toggle: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let view_href = AppRoute::Post { id: post.post_id.clone() }.path();
    let edit_href = AppRoute::AdminEdit { id: post.post_id.clone() }.path();
    let toggle_id = post.post_id.clone();
    let delete_id = post.post_id.clone();
    let status = if post.published { "Published" } else { "Draft" };
    let toggle_label = if post.published { "Unpublish" } else { "Publish" };

    view! {
        <tr>
            <td class="admin-table__title">{post.title}</td>
            <td>
                <span class="badge" class:badge--draft=!post.published>
                    {status}
                </span>
            </td>
            <td>{post.comment_count}</td>
            <td>{display::format_date(&post.created_at, DateStyle::Short)}</td>
            <td class="admin-table__actions">
                <a class="btn btn--ghost" href=view_href>
                    "View"
                </a>
                <a class="btn btn--ghost" href=edit_href>
                    "Edit"
                </a>
                <button class="btn btn--ghost" on:click=move |_| on_toggle.run(toggle_id.clone())>
                    {toggle_label}
                </button>
                <button class="btn btn--ghost btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
