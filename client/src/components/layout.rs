//! Site header and footer.
//!
//! The header carries the search box, the theme toggle and either the user
//! menu or a login link, driven by the mirrored session signal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use thoughts::content::display;
use thoughts::routes::AppRoute;

use crate::state::use_app;
use crate::util::theme;

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();
    let session = app.session;
    let theme_signal = app.theme;
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);

    let search_nav = navigate.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = query.get().trim().to_owned();
        if term.is_empty() {
            return;
        }
        search_nav(&AppRoute::Search { query: term }.path(), NavigateOptions::default());
    };

    let toggle_app = app.clone();
    let on_toggle_theme = move |_: leptos::ev::MouseEvent| toggle_app.toggle_theme();

    let logout_app = app.clone();
    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        navigate(&AppRoute::Home.path(), NavigateOptions::default());
        let app = logout_app.clone();
        leptos::task::spawn_local(async move {
            app.store.clear_session(&*app.api).await;
            app.success("Logged out");
        });
    });

    view! {
        <header class="header">
            <div class="header__inner">
                <a href="/" class="header__brand">
                    "Thoughts"
                </a>
                <form class="header__search" on:submit=on_search>
                    <input
                        class="input"
                        type="search"
                        placeholder="Search posts..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </form>
                <div class="header__actions">
                    <button
                        class="btn btn--ghost"
                        title="Toggle theme"
                        aria-label="Toggle theme"
                        on:click=on_toggle_theme
                    >
                        {move || theme::toggle_icon(theme_signal.get())}
                    </button>
                    <Show
                        when=move || session.get().user.is_some()
                        fallback=|| {
                            view! {
                                <a href="/login" class="btn btn--primary">
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <div class="user-menu">
                            <button
                                class="avatar"
                                aria-label="User menu"
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                {move || {
                                    session.get().user.map(|u| display::initial(&u.name)).unwrap_or_default()
                                }}
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="user-menu__dropdown card">
                                    <div class="user-menu__name">
                                        {move || session.get().user.map(|u| u.name).unwrap_or_default()}
                                    </div>
                                    <Show when=move || session.get().is_admin()>
                                        <a
                                            href="/admin"
                                            class="user-menu__item"
                                            on:click=move |_| menu_open.set(false)
                                        >
                                            "Dashboard"
                                        </a>
                                    </Show>
                                    <button class="user-menu__item" on:click=move |_| on_logout.run(())>
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Thoughts · a small blog about big ideas"</p>
        </footer>
    }
}
