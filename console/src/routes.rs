//! Route paths shared by guards, navigation links, and redirects.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const SIGN_IN: &str = "/";
pub const SIGN_IN_ALIAS: &str = "/signin";
pub const DASHBOARD: &str = "/dashboard";
pub const USERS: &str = "/users";
pub const PROFILE: &str = "/profile-admin";
pub const SETTINGS: &str = "/settings-admin";
pub const LOGOUT: &str = "/logout-admin";

pub fn user_detail(user_id: &str) -> String {
    format!("/users/{user_id}")
}

pub fn user_files(user_id: &str) -> String {
    format!("/users/{user_id}/files")
}
