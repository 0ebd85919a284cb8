//! Session validity checks shared by guards, the layout watcher, and sign-in.
//!
//! Expiry is fail-closed: a missing token or an absent/unparseable expiry
//! counts as expired.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use time::OffsetDateTime;

use super::store::SessionStore;
use super::types::UserSummary;

/// True when the store holds a complete session with a non-empty token.
pub fn is_authenticated(store: &(impl SessionStore + ?Sized)) -> bool {
    store.get().is_some_and(|s| !s.token.is_empty())
}

/// True unless a token is present and its expiry lies after `now`.
pub fn is_token_expired(store: &(impl SessionStore + ?Sized), now: OffsetDateTime) -> bool {
    if store.token().is_none() {
        return true;
    }
    store.expires_at().is_none_or(|at| at <= now)
}

/// Authenticated and not expired.
pub fn has_valid_session(store: &(impl SessionStore + ?Sized), now: OffsetDateTime) -> bool {
    is_authenticated(store) && !is_token_expired(store, now)
}

pub fn clear_auth(store: &(impl SessionStore + ?Sized)) {
    log::debug!("clearing stored session");
    store.clear();
}

pub fn token(store: &(impl SessionStore + ?Sized)) -> Option<String> {
    store.token()
}

pub fn current_user(store: &(impl SessionStore + ?Sized)) -> Option<UserSummary> {
    store.get().map(|s| s.user)
}
