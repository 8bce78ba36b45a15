use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="empty not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a class="btn btn--primary" href="/">
                "Go Home"
            </a>
        </div>
    }
}
