//! Signed-in identity as seen by the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Refreshed from the session store after sign-in, after each guard decision,
//! and on logout. Components read it for display; authorization decisions
//! always go back to the store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::auth::current_user;
use crate::session::{SessionStore, UserSummary};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserSummary>,
    /// Location a guard bounced the user away from. Captured only; sign-in
    /// always lands on the dashboard.
    pub return_to: Option<String>,
}

impl AuthState {
    pub fn from_store(store: &(impl SessionStore + ?Sized)) -> Self {
        Self { user: current_user(store), return_to: None }
    }

    /// Re-read the user from the store, keeping `return_to`.
    pub fn sync(&mut self, store: &(impl SessionStore + ?Sized)) {
        self.user = current_user(store);
    }

    pub fn signed_out(&mut self) {
        self.user = None;
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "Admin".to_owned(), UserSummary::display_name)
    }

    pub fn role(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.role.clone())
            .unwrap_or_default()
    }
}
