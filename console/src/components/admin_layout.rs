//! Authenticated shell: sidebar navigation, header, and routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once under `RequireAuth` for every protected route. Owns the
//! periodic and cross-tab session watch for as long as any protected page is
//! open.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes;
use crate::session::SharedSessionStore;
use crate::state::auth::AuthState;
use crate::util::auth::install_session_watch;

/// Sidebar entries as `(label, path)`.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("Dashboard", routes::DASHBOARD),
    ("Users", routes::USERS),
    ("Profile", routes::PROFILE),
    ("Settings", routes::SETTINGS),
];

/// A nav entry is active on its own path and anything nested below it.
pub fn is_nav_active(item_path: &str, current: &str) -> bool {
    current == item_path
        || current
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let store = expect_context::<SharedSessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_watch(store, auth, use_navigate());

    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    view! {
        <div class="admin-layout" class:admin-layout--menu-open=move || menu_open.get()>
            <aside class="admin-sidebar">
                <div class="admin-sidebar__brand">"Admin Console"</div>
                <nav class="admin-sidebar__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, path)| {
                            view! {
                                <A href=path attr:class=move || {
                                    if is_nav_active(path, &pathname.get()) {
                                        "admin-sidebar__link admin-sidebar__link--active"
                                    } else {
                                        "admin-sidebar__link"
                                    }
                                }>
                                    {label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <div class="admin-main">
                <header class="admin-header">
                    <button class="btn admin-header__menu" on:click=move |_| menu_open.update(|o| *o = !*o)>
                        "☰"
                    </button>
                    <span class="admin-header__spacer"></span>
                    <span class="admin-header__user">{move || auth.get().display_name()}</span>
                    <Show when=move || !auth.get().role().is_empty()>
                        <span class="admin-header__role">{move || auth.get().role()}</span>
                    </Show>
                    <A href=routes::LOGOUT attr:class="btn admin-header__logout">
                        "Logout"
                    </A>
                </header>
                <main class="admin-content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
