//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, submit
//! handlers) and keeps request lifecycle transitions in `state`.

pub mod dashboard;
pub mod logout;
pub mod not_found;
pub mod profile;
pub mod settings;
pub mod signin;
pub mod user_detail;
pub mod user_files;
pub mod users;
