//! Logout route: clear the session and leave for sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::session::SharedSessionStore;
use crate::session::auth::clear_auth;
use crate::state::auth::AuthState;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let store = expect_context::<SharedSessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        clear_auth(store.as_ref());
        auth.set(AuthState::default());
        navigate(routes::SIGN_IN, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <div class="logout-page" aria-busy="true">"Signing out..."</div> }
}
