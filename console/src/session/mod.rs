//! Client-side session lifecycle and route gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` owns the persisted key layout, `auth` answers validity questions
//! over any store, and `guard` turns those answers into route decisions that
//! components act on. Nothing here touches the network.

pub mod auth;
pub mod guard;
pub mod store;
pub mod types;

pub use store::{SessionStore, SharedSessionStore};
pub use types::{Session, UserSummary};
