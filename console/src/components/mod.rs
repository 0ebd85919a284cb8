//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin chrome and shared widgets while reading/writing
//! shared state from Leptos context providers.

pub mod admin_layout;
pub mod metrics;
pub mod notice;
pub mod route_guard;
