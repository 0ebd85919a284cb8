//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`auth`, `users`, `files`) so components depend on
//! small focused models. Each is a plain struct held in an `RwSignal`.

pub mod auth;
pub mod files;
pub mod users;
