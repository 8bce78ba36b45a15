//! Sidebar list of tags with post counts.

use leptos::prelude::*;
use thoughts::net::types::TagCount;
use thoughts::routes::AppRoute;

use crate::state::use_app;

#[component]
pub fn TagCloud() -> impl IntoView {
    let app = use_app();
    let tags = RwSignal::new(Vec::<TagCount>::new());

    leptos::task::spawn_local(async move {
        use thoughts::net::api::ContentApi as _;
        match app.api.list_tags().await {
            Ok(list) => tags.set(list),
            Err(e) => tracing::warn!(error = %e, "tag cloud unavailable"),
        }
    });

    view! {
        <Show when=move || !tags.get().is_empty()>
            <aside class="card tag-cloud">
                <h3 class="tag-cloud__title">"Tags"</h3>
                <div class="tag-cloud__list">
                    {move || {
                        tags.get()
                            .into_iter()
                            .map(|tag| {
                                let href = AppRoute::Tag { tag: tag.name.clone() }.path();
                                view! {
                                    <a class="tag" href=href>
                                        {thoughts::content::display::tag_label(&tag.name)}
                                        <span class="tag__count">{tag.count}</span>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </aside>
        </Show>
    }
}
