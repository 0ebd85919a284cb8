//! Session persistence over a key/value storage backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists into `window.localStorage`; tests and server
//! rendering use an in-memory map. Guards and the API client only ever see the
//! `SessionStore` trait object provided through Leptos context.
//!
//! DESIGN
//! ======
//! A session is three keys. `set` writes the token last so an observer in
//! another tab never sees a token without its companions, and rolls every key
//! back if any write fails. `get` is all-or-nothing.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use time::OffsetDateTime;

use super::types::{Session, UserSummary, format_expiry, parse_expiry};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";
pub const EXPIRY_KEY: &str = "tokenExpiry";

/// Every key that makes up a persisted session.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_KEY, EXPIRY_KEY];

/// Legacy markers older builds left behind; removed on every clear.
pub const AUXILIARY_KEYS: [&str; 2] = ["sessionToken", "token"];

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed for key {key}")]
    Write { key: String },
    #[error("user encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("expiry format failed: {0}")]
    Format(#[from] time::error::Format),
}

/// Raw string key/value storage.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (quota, privacy mode).
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove_item(&self, key: &str);

    /// Drop tab-scoped state that should not outlive a session.
    fn clear_transient(&self) {}
}

/// Repository for the signed-in session.
pub trait SessionStore {
    /// The full session, or `None` if any part is missing or unreadable.
    fn get(&self) -> Option<Session>;

    /// # Errors
    ///
    /// Returns an error if the session could not be written in full; in that
    /// case nothing is left behind.
    fn set(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove all session keys and auxiliary markers.
    fn clear(&self);

    /// Bearer token, if one is stored.
    fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    /// Stored expiry, if present and parseable.
    fn expires_at(&self) -> Option<OffsetDateTime> {
        self.get().map(|s| s.expires_at)
    }
}

/// Session store handle shared through Leptos context.
pub type SharedSessionStore = Arc<dyn SessionStore + Send + Sync>;

/// `SessionStore` implementation over any `StorageBackend`.
#[derive(Clone, Debug, Default)]
pub struct KeyValueSessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> KeyValueSessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn remove_session_keys(&self) {
        for key in SESSION_KEYS {
            self.backend.remove_item(key);
        }
    }
}

impl<B: StorageBackend> SessionStore for KeyValueSessionStore<B> {
    fn get(&self) -> Option<Session> {
        let token = self.token()?;
        let raw_user = self.backend.get_item(USER_KEY)?;
        let user = match serde_json::from_str::<UserSummary>(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                log::debug!("stored user is unreadable: {e}");
                return None;
            }
        };
        let expires_at = self.expires_at()?;
        Some(Session { token, user, expires_at })
    }

    fn set(&self, session: &Session) -> Result<(), SessionError> {
        let user = serde_json::to_string(&session.user)?;
        let expiry = format_expiry(session.expires_at)?;
        let writes = [(EXPIRY_KEY, expiry.as_str()), (USER_KEY, user.as_str()), (TOKEN_KEY, session.token.as_str())];
        for (key, value) in writes {
            if let Err(e) = self.backend.set_item(key, value) {
                log::warn!("session write failed, rolling back: {e}");
                self.remove_session_keys();
                return Err(e);
            }
        }
        Ok(())
    }

    fn clear(&self) {
        self.remove_session_keys();
        for key in AUXILIARY_KEYS {
            self.backend.remove_item(key);
        }
        self.backend.clear_transient();
    }

    fn token(&self) -> Option<String> {
        self.backend.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn expires_at(&self) -> Option<OffsetDateTime> {
        self.backend.get_item(EXPIRY_KEY).as_deref().and_then(parse_expiry)
    }
}

/// In-memory backend used by tests and server rendering.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    items: Arc<Mutex<BTreeMap<String, String>>>,
    transient: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    pub fn contains(&self, key: &str) -> bool {
        self.lock_items().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_items().is_empty()
    }

    /// Seed a tab-scoped value, as `sessionStorage.setItem` would.
    pub fn set_transient(&self, key: &str, value: &str) {
        self.transient
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn transient_len(&self) -> usize {
        self.transient.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn lock_items(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.lock_items().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.lock_items().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.lock_items().remove(key);
    }

    fn clear_transient(&self) {
        self.transient.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// `window.localStorage` backend; tab-scoped markers live in `sessionStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

#[cfg(feature = "hydrate")]
impl BrowserBackend {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = Self::local().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| SessionError::Write { key: key.to_owned() })
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear_transient(&self) {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.clear();
        }
    }
}

/// The store the running app should use: browser storage when hydrated,
/// an empty in-memory store while rendering on the server.
pub fn default_store() -> SharedSessionStore {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(KeyValueSessionStore::new(BrowserBackend))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(KeyValueSessionStore::new(MemoryBackend::default()))
    }
}
