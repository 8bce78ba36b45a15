//! Posts carrying one tag.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thoughts::content::display;
use thoughts::content::feed;
use thoughts::net::types::Post;

use crate::components::post_card::PostCard;
use crate::state::use_app;

#[component]
pub fn TagPage() -> impl IntoView {
    let app = use_app();
    let params = use_params_map();
    let tag = move || params.read().get("tag").unwrap_or_default();
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let current = tag();
        loading.set(true);
        let app = app.clone();
        leptos::task::spawn_local(async move {
            match feed::load_tagged(&*app.api, &current).await {
                Ok(list) => posts.set(list),
                Err(e) => {
                    tracing::warn!(error = %e, tag = %current, "tag listing failed");
                    posts.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="listing">
            <h1 class="listing__title">{move || display::tag_label(&tag())}</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <p class="listing__summary">{move || feed::tagged_summary(posts.get().len())}</p>
                <div class="grid">
                    {move || posts.get().into_iter().map(|post| view! { <PostCard post/> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
