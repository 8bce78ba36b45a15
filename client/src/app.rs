//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one `AppContext` for this page load, applies the stored
//! theme and starts the session bootstrap. A load that arrives carrying an
//! OAuth `#session_id=` fragment renders only the callback screen; the
//! exchange ends in a full-page navigation, so the router never mounts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use thoughts::routes::Access;

use crate::components::layout::{Footer, Header};
use crate::components::protected::Protected;
use crate::components::toaster::Toaster;
use crate::net::BrowserBackend;
use crate::pages::{
    admin::AdminPage, auth_callback::AuthCallbackPage, create_post::CreatePostPage, edit_post::EditPostPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, post::PostPage, register::RegisterPage,
    search::SearchPage, tag::TagPage,
};
use crate::state::AppContext;
use crate::util::{browser, theme};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = AppContext::new(BrowserBackend::from_build_env());
    provide_context(app.clone());
    theme::apply(app.theme.get_untracked());

    let fragment = browser::current_hash();
    if app.oauth.is_pending(&fragment) {
        return view! {
            <Title text="Signing in · Thoughts"/>
            <AuthCallbackPage fragment/>
            <Toaster/>
        }
        .into_any();
    }

    let bootstrap = app.clone();
    leptos::task::spawn_local(async move {
        bootstrap.bootstrap.run(&bootstrap.store, &*bootstrap.api).await;
    });

    view! {
        <Title text="Thoughts"/>
        <Router>
            <Header/>
            <main class="main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("post"), ParamSegment("id")) view=PostPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=(StaticSegment("tag"), ParamSegment("tag")) view=TagPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <Protected access=Access::Admin><AdminPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("create"))
                        view=|| view! { <Protected access=Access::Admin><CreatePostPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <Protected access=Access::Admin><EditPostPage/></Protected> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
        <Toaster/>
    }
    .into_any()
}
