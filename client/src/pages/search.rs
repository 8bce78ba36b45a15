//! Search results for `?q=`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thoughts::content::feed;
use thoughts::net::types::Post;

use crate::components::post_card::PostCard;
use crate::state::use_app;

#[component]
pub fn SearchPage() -> impl IntoView {
    let app = use_app();
    let query = use_query_map();
    let term = move || query.read().get("q").unwrap_or_default().trim().to_owned();
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(false);

    Effect::new(move || {
        let current = term();
        if current.is_empty() {
            posts.set(Vec::new());
            return;
        }
        loading.set(true);
        let app = app.clone();
        leptos::task::spawn_local(async move {
            match feed::search(&*app.api, &current).await {
                Ok(list) => posts.set(list),
                Err(e) => {
                    tracing::warn!(error = %e, term = %current, "search failed");
                    posts.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="listing">
            <h1 class="listing__title">"Search"</h1>
            <Show when=move || !term().is_empty()>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
                >
                    <p class="listing__summary">{move || feed::search_summary(posts.get().len(), &term())}</p>
                    <div class="grid">
                        {move || posts.get().into_iter().map(|post| view! { <PostCard post/> }).collect_view()}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
