//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards decide once per navigation. The admin layout additionally
//! re-checks the stored session on a timer and whenever another tab touches
//! the session keys, so a logout anywhere reaches every open tab.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use time::OffsetDateTime;

use crate::routes;
use crate::session::auth::{clear_auth, has_valid_session};
use crate::session::store::SESSION_KEYS;
use crate::session::{SessionStore, SharedSessionStore};
use crate::state::auth::AuthState;

/// Whether a `storage` event for `key` can change the session. A `None` key
/// means the whole storage area was cleared.
pub fn storage_change_affects_session(key: Option<&str>) -> bool {
    key.is_none_or(|k| SESSION_KEYS.contains(&k))
}

/// Clear an invalid session. Returns `true` when the caller must leave the
/// protected area.
pub fn session_check_failed(store: &(impl SessionStore + ?Sized), now: OffsetDateTime) -> bool {
    if has_valid_session(store, now) {
        return false;
    }
    clear_auth(store);
    true
}

/// Check the session now, every `SESSION_CHECK_INTERVAL`, and on every
/// relevant storage event; on failure clear it and replace the current
/// history entry with `/signin`.
pub fn install_session_watch<F>(store: SharedSessionStore, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let check = move || {
        if session_check_failed(store.as_ref(), crate::util::clock::now_utc()) {
            log::debug!("session no longer valid; leaving protected area");
            auth.update(AuthState::signed_out);
            navigate(routes::SIGN_IN_ALIAS, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    };

    let initial = check.clone();
    Effect::new(move || initial());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let periodic = check.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(crate::config::SESSION_CHECK_INTERVAL).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                periodic();
            }
        });

        let on_storage = check;
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            if storage_change_affects_session(ev.key().as_deref()) {
                on_storage();
            }
        });
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            handle.remove();
        });
    }
}
