//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage
//! events, timers) from page and component logic to improve testability.

pub mod auth;
pub mod clock;
pub mod dom;
pub mod format;
