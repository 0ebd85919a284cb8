//! Route-guard decisions.
//!
//! DESIGN
//! ======
//! Deciding and acting are split: `evaluate` is a pure function of the store,
//! the clock, and the attempted location, and returns a tagged decision. The
//! `RequireAuth` / `RequireAnonymous` components perform the navigation.
//! The one side effect here is clearing a stale session, which must happen
//! before any redirect away from a protected route.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use time::OffsetDateTime;

use super::auth::{clear_auth, has_valid_session};
use super::store::SessionStore;
use crate::routes;

/// Which side of the sign-in boundary a route lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Only reachable with a valid session.
    RequireAuth,
    /// Only reachable without one (sign-in).
    RequireAnonymous,
}

/// Where to send the user instead of rendering the route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    /// The location the user tried to reach, kept for resuming after sign-in.
    pub from: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Authorized,
    Redirect(Redirect),
}

/// Per-render guard state. `Checking` holds until the decision runs in the
/// browser; server rendering never leaves it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Checking,
    Authorized,
    Redirecting(Redirect),
}

impl From<GuardDecision> for GuardState {
    fn from(decision: GuardDecision) -> Self {
        match decision {
            GuardDecision::Authorized => Self::Authorized,
            GuardDecision::Redirect(r) => Self::Redirecting(r),
        }
    }
}

impl GuardKind {
    pub fn evaluate(self, store: &(impl SessionStore + ?Sized), now: OffsetDateTime, location: &str) -> GuardDecision {
        match self {
            Self::RequireAuth => require_auth(store, now, location),
            Self::RequireAnonymous => require_anonymous(store, now),
        }
    }
}

/// Authorize when the session is valid; otherwise clear it and redirect to
/// sign-in carrying `location`.
pub fn require_auth(store: &(impl SessionStore + ?Sized), now: OffsetDateTime, location: &str) -> GuardDecision {
    if has_valid_session(store, now) {
        return GuardDecision::Authorized;
    }
    clear_auth(store);
    GuardDecision::Redirect(Redirect { to: routes::SIGN_IN, from: Some(location.to_owned()) })
}

/// Redirect signed-in users to the dashboard; everyone else may proceed.
pub fn require_anonymous(store: &(impl SessionStore + ?Sized), now: OffsetDateTime) -> GuardDecision {
    if has_valid_session(store, now) {
        GuardDecision::Redirect(Redirect { to: routes::DASHBOARD, from: None })
    } else {
        GuardDecision::Authorized
    }
}
