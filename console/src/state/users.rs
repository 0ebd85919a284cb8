//! User-management list state.
//!
//! DESIGN
//! ======
//! Request lifecycle transitions live here as small methods so the users page
//! only wires events to them; the page itself never mutates fields directly.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{Pagination, User, UserListData, UserListQuery};

/// Filter inputs as entered; empty strings mean "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub role: String,
    pub is_active: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<User>,
    pub pagination: Pagination,
    pub filters: UserFilters,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl UsersState {
    /// Query for the current page and filters.
    pub fn query(&self) -> UserListQuery {
        UserListQuery {
            page: self.pagination.page.max(1),
            limit: self.pagination.limit.max(1),
            role: Some(self.filters.role.trim().to_owned()).filter(|r| !r.is_empty()),
            is_active: parse_active_filter(&self.filters.is_active),
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;
    }

    /// A list refresh keeps any notice from the action that triggered it.
    pub fn refreshing(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Drop `notice` if it is still the one shown; a newer notice stays.
    pub fn expire_notice(&mut self, notice: &str) {
        if self.notice.as_deref() == Some(notice) {
            self.notice = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.error = None;
        self.notice = None;
    }

    pub fn loaded(&mut self, data: UserListData) {
        self.items = data.users;
        self.pagination = data.pagination;
        self.loading = false;
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub fn succeeded(&mut self, notice: String) {
        self.notice = Some(notice);
        self.loading = false;
    }

    /// Move to `page` if it exists. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let last = self.pagination.total_pages.max(1);
        let target = page.clamp(1, last);
        if target == self.pagination.page {
            return false;
        }
        self.pagination.page = target;
        true
    }

    /// Changing a filter restarts paging.
    pub fn set_filters(&mut self, filters: UserFilters) {
        self.filters = filters;
        self.pagination.page = 1;
    }

    pub fn find(&self, user_id: &str) -> Option<&User> {
        self.items.iter().find(|u| u.user_id == user_id)
    }
}

/// `"true"` / `"false"` select a filter; anything else means "any".
pub fn parse_active_filter(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn created_notice(email: &str) -> String {
    format!("User \"{email}\" has been created successfully!")
}

pub fn updated_notice(name: &str) -> String {
    format!("User \"{name}\" has been updated successfully!")
}

pub fn deleted_notice(name: &str) -> String {
    format!("User \"{name}\" has been deleted successfully!")
}

pub fn delete_prompt(user: Option<&User>) -> String {
    let name = user.map_or_else(|| "this user".to_owned(), User::display_name);
    let name = if name.is_empty() { "this user".to_owned() } else { name };
    format!("Are you sure you want to delete {name}?")
}

pub fn toggled_notice(name: &str, now_active: bool) -> String {
    let action = if now_active { "activated" } else { "deactivated" };
    format!("{name} has been {action} successfully!")
}
