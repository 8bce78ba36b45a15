//! Post summary cards for listings.

use leptos::prelude::*;
use thoughts::content::display::{self, DateStyle};
use thoughts::net::types::Post;
use thoughts::routes::AppRoute;

/// `featured` renders the large hero card used on the first home page.
#[component]
pub fn PostCard(post: Post, #[prop(optional)] featured: bool) -> impl IntoView {
    let href = AppRoute::Post { id: post.post_id.clone() }.path();
    let date = display::format_date(&post.created_at, DateStyle::Short);
    let comments = display::comment_count_label(post.comment_count);
    let tags = post
        .tags
        .iter()
        .map(|tag| {
            let href = AppRoute::Tag { tag: tag.clone() }.path();
            view! { <a class="tag" href=href>{display::tag_label(tag)}</a> }
        })
        .collect_view();

    view! {
        <article class="card post-card" class:post-card--featured=featured>
            <div class="post-card__tags">{tags}</div>
            <a class="post-card__title" href=href.clone()>
                <h2>{post.title}</h2>
            </a>
            <p class="post-card__preview">{post.preview}</p>
            <div class="post-card__meta">
                <span>{post.author_name}</span>
                <span>{date}</span>
                <span>{comments}</span>
            </div>
            <a class="post-card__more" href=href>
                "Read more →"
            </a>
        </article>
    }
}
