//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues bearer-authenticated requests and maps failures, `types`
//! defines the envelope and resource schema.

pub mod api;
pub mod types;
