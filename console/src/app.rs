//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::route_guard::{RequireAnonymous, RequireAuth};
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, logout::LogoutPage, not_found::NotFoundPage, profile::ProfilePage,
    settings::SettingsPage, signin::SignInPage, user_detail::UserDetailPage, user_files::UserFilesPage,
    users::UsersPage,
};
use crate::session::store::default_store;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, the displayed identity, and the API client,
/// then routes anonymous screens and the guarded admin area.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = default_store();
    // Populated by the guards once the browser owns storage, so the server
    // and the first client render agree.
    let auth = RwSignal::new(AuthState::default());
    let api = ApiClient::new(ApiConfig::default(), store.clone());

    provide_context(store);
    provide_context(auth);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| view! { <RequireAuth><NotFoundPage/></RequireAuth> }>
                <Route path=StaticSegment("") view=AnonymousSignIn/>
                <Route path=StaticSegment("signin") view=AnonymousSignIn/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=(StaticSegment("users"), ParamSegment("user_id")) view=UserDetailPage/>
                    <Route
                        path=(StaticSegment("users"), ParamSegment("user_id"), StaticSegment("files"))
                        view=UserFilesPage
                    />
                    <Route path=StaticSegment("profile-admin") view=ProfilePage/>
                    <Route path=StaticSegment("settings-admin") view=SettingsPage/>
                    <Route path=StaticSegment("logout-admin") view=LogoutPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn AnonymousSignIn() -> impl IntoView {
    view! {
        <RequireAnonymous>
            <SignInPage/>
        </RequireAnonymous>
    }
}

#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminLayout/>
        </RequireAuth>
    }
}
