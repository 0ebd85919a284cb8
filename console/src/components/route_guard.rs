//! `RequireAuth` / `RequireAnonymous` route wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each wrapper re-runs its guard decision whenever the location changes and
//! either renders its children or replaces the history entry with the
//! redirect target. The decision itself lives in `session::guard`.
//!
//! Server rendering and the first hydrated frame both show the `Checking`
//! placeholder; the decision only runs once the browser owns the storage.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::SharedSessionStore;
use crate::session::guard::{GuardDecision, GuardKind, GuardState};
use crate::state::auth::AuthState;
use crate::util::clock::now_utc;

/// Render children only with a valid session; otherwise clear it and go to
/// sign-in.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::RequireAuth, children)
}

/// Render children only without a valid session; otherwise go to the
/// dashboard.
#[component]
pub fn RequireAnonymous(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::RequireAnonymous, children)
}

/// `pathname` plus `?search` when there is one.
pub(crate) fn attempted_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SharedSessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let state = RwSignal::new(GuardState::Checking);

    Effect::new(move || {
        let attempted = attempted_location(&location.pathname.get(), &location.search.get());
        let decision = kind.evaluate(store.as_ref(), now_utc(), &attempted);
        match &decision {
            GuardDecision::Authorized => auth.update(|a| a.sync(store.as_ref())),
            GuardDecision::Redirect(redirect) => {
                log::debug!("{kind:?} redirecting {attempted} -> {}", redirect.to);
                if let Some(from) = redirect.from.clone() {
                    auth.update(|a| {
                        a.signed_out();
                        a.return_to = Some(from);
                    });
                }
                navigate(redirect.to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
        let next = GuardState::from(decision);
        if state.get_untracked() != next {
            state.set(next);
        }
    });

    move || match state.get() {
        GuardState::Authorized => children().into_any(),
        GuardState::Checking | GuardState::Redirecting(_) => {
            view! { <div class="route-guard route-guard--pending" aria-busy="true"></div> }.into_any()
        }
    }
}
