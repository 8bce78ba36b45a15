//! Home feed: featured post, paged grid, tag cloud.

use leptos::prelude::*;
use thoughts::content::feed::{self, Pager};
use thoughts::net::types::Post;

use crate::components::post_card::PostCard;
use crate::components::tag_cloud::TagCloud;
use crate::state::use_app;

#[derive(Clone, Debug, Default)]
struct Feed {
    featured: Option<Post>,
    grid: Vec<Post>,
    pager: Option<Pager>,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let page = RwSignal::new(1_u32);
    let loaded = RwSignal::new(Feed::default());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let current = page.get();
        loading.set(true);
        let app = app.clone();
        leptos::task::spawn_local(async move {
            match feed::load_home(&*app.api, current).await {
                Ok((posts, pager)) => {
                    let (featured, grid) = feed::split_featured(current, posts);
                    loaded.set(Feed { featured, grid, pager: Some(pager) });
                }
                Err(e) => {
                    tracing::warn!(error = %e, page = current, "home feed failed");
                    loaded.set(Feed::default());
                }
            }
            loading.set(false);
        });
    });

    let pager = move || loaded.get().pager.filter(Pager::is_visible);

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Thoughts"</h1>
                <p>"Essays and notes on software, craft and the occasional tangent."</p>
            </section>
            <div class="home__layout">
                <div class="home__feed">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
                    >
                        <Show
                            when=move || loaded.get().featured.is_some() || !loaded.get().grid.is_empty()
                            fallback=|| view! { <p class="empty">"No posts yet."</p> }
                        >
                            {move || {
                                loaded.get().featured.map(|post| view! { <PostCard post featured=true/> })
                            }}
                            <div class="grid">
                                {move || {
                                    loaded.get().grid.into_iter().map(|post| view! { <PostCard post/> }).collect_view()
                                }}
                            </div>
                        </Show>
                        {move || {
                            pager()
                                .map(|p| {
                                    view! {
                                        <nav class="pager">
                                            <button
                                                class="btn btn--ghost"
                                                disabled=!p.has_prev()
                                                on:click=move |_| page.set(p.prev())
                                            >
                                                "← Previous"
                                            </button>
                                            <span class="pager__label">{p.label()}</span>
                                            <button
                                                class="btn btn--ghost"
                                                disabled=!p.has_next()
                                                on:click=move |_| page.set(p.next())
                                            >
                                                "Next →"
                                            </button>
                                        </nav>
                                    }
                                })
                        }}
                    </Show>
                </div>
                <TagCloud/>
            </div>
        </div>
    }
}
