use super::*;
use time::macros::datetime;

// =============================================================
// Helpers
// =============================================================

fn make_session() -> Session {
    Session {
        token: "abc".to_owned(),
        user: UserSummary { id: Some("u-1".to_owned()), email: Some("a@b.com".to_owned()), role: Some("admin".to_owned()) },
        expires_at: datetime!(2030-01-01 00:00 UTC),
    }
}

fn seeded(token: Option<&str>, user: Option<&str>, expiry: Option<&str>) -> KeyValueSessionStore<MemoryBackend> {
    let backend = MemoryBackend::default();
    if let Some(v) = token {
        backend.set_item(TOKEN_KEY, v).unwrap();
    }
    if let Some(v) = user {
        backend.set_item(USER_KEY, v).unwrap();
    }
    if let Some(v) = expiry {
        backend.set_item(EXPIRY_KEY, v).unwrap();
    }
    KeyValueSessionStore::new(backend)
}

/// Backend that rejects writes to one key.
#[derive(Clone, Default)]
struct RejectingBackend {
    inner: MemoryBackend,
    reject: &'static str,
}

impl StorageBackend for RejectingBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if key == self.reject {
            return Err(SessionError::Write { key: key.to_owned() });
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

// =============================================================
// get / set
// =============================================================

#[test]
fn set_writes_all_three_keys() {
    let store = KeyValueSessionStore::new(MemoryBackend::default());
    store.set(&make_session()).unwrap();

    let backend = store.backend();
    assert_eq!(backend.get_item(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(backend.get_item(EXPIRY_KEY).as_deref(), Some("2030-01-01T00:00:00Z"));
    let user: serde_json::Value = serde_json::from_str(&backend.get_item(USER_KEY).unwrap()).unwrap();
    assert_eq!(user, serde_json::json!({ "UserId": "u-1", "Email": "a@b.com", "Role": "admin" }));
}

#[test]
fn get_returns_what_set_stored() {
    let store = KeyValueSessionStore::new(MemoryBackend::default());
    let session = make_session();
    store.set(&session).unwrap();
    assert_eq!(store.get(), Some(session));
}

#[test]
fn get_is_none_when_any_key_missing() {
    let expiry = Some("2030-01-01T00:00:00Z");
    let cases = [
        (None, Some("{}"), expiry),
        (Some("abc"), None, expiry),
        (Some("abc"), Some("{}"), None),
        (None, None, None),
    ];
    for (token, user, exp) in cases {
        assert!(seeded(token, user, exp).get().is_none(), "{token:?} {user:?} {exp:?}");
    }
}

#[test]
fn get_is_none_for_empty_token() {
    assert!(seeded(Some(""), Some("{}"), Some("2030-01-01T00:00:00Z")).get().is_none());
}

#[test]
fn get_is_none_for_malformed_user_json() {
    assert!(seeded(Some("abc"), Some("{not json"), Some("2030-01-01T00:00:00Z")).get().is_none());
    assert!(seeded(Some("abc"), Some("42"), Some("2030-01-01T00:00:00Z")).get().is_none());
}

#[test]
fn get_is_none_for_unparseable_expiry() {
    assert!(seeded(Some("abc"), Some("{}"), Some("soon")).get().is_none());
}

#[test]
fn set_rolls_back_when_a_write_fails() {
    let backend = RejectingBackend { inner: MemoryBackend::default(), reject: TOKEN_KEY };
    let store = KeyValueSessionStore::new(backend);

    let err = store.set(&make_session()).unwrap_err();
    assert!(matches!(err, SessionError::Write { ref key } if key == TOKEN_KEY));
    assert!(store.backend().inner.is_empty());
    assert!(store.get().is_none());
}

#[test]
fn set_overwrites_previous_session() {
    let store = KeyValueSessionStore::new(MemoryBackend::default());
    store.set(&make_session()).unwrap();
    let next = Session { token: "xyz".to_owned(), ..make_session() };
    store.set(&next).unwrap();
    assert_eq!(store.get().map(|s| s.token), Some("xyz".to_owned()));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_session_and_auxiliary_keys() {
    let store = seeded(Some("abc"), Some("{}"), Some("2030-01-01T00:00:00Z"));
    store.backend().set_item("sessionToken", "legacy").unwrap();
    store.backend().set_item("token", "legacy").unwrap();
    store.backend().set_item("theme", "dark").unwrap();
    store.backend().set_transient("draft", "x");

    store.clear();

    for key in SESSION_KEYS.iter().chain(AUXILIARY_KEYS.iter()) {
        assert!(!store.backend().contains(key), "{key} left behind");
    }
    assert!(store.backend().contains("theme"));
    assert_eq!(store.backend().transient_len(), 0);
}

#[test]
fn clear_is_idempotent() {
    let store = seeded(Some("abc"), Some("{}"), Some("2030-01-01T00:00:00Z"));
    store.clear();
    store.clear();
    assert!(store.backend().is_empty());
}

// =============================================================
// raw readers
// =============================================================

#[test]
fn token_reads_raw_key_without_companions() {
    let store = seeded(Some("abc"), None, None);
    assert_eq!(store.token().as_deref(), Some("abc"));
    assert!(store.get().is_none());
}

#[test]
fn expires_at_reads_raw_key() {
    let store = seeded(None, None, Some("2030-01-01T00:00:00Z"));
    assert_eq!(store.expires_at(), Some(datetime!(2030-01-01 00:00 UTC)));
    assert!(seeded(None, None, Some("bad")).expires_at().is_none());
}

#[test]
fn default_store_starts_empty_outside_browser() {
    let store = default_store();
    assert!(store.get().is_none());
    assert!(store.token().is_none());
}
