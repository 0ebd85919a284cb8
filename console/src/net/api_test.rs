use super::*;
use std::sync::Arc;

use crate::session::store::{KeyValueSessionStore, MemoryBackend, StorageBackend, TOKEN_KEY};
use crate::session::{SessionStore, UserSummary};
use time::macros::datetime;

// =============================================================
// Helpers
// =============================================================

fn client_with(backend: MemoryBackend) -> ApiClient {
    ApiClient::new(
        ApiConfig::new("https://api.example.test/", "v1"),
        Arc::new(KeyValueSessionStore::new(backend)),
    )
}

fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

// =============================================================
// Paths and headers
// =============================================================

#[test]
fn url_joins_base_version_and_path() {
    let client = client_with(MemoryBackend::default());
    assert_eq!(client.url("/users"), "https://api.example.test/api/v1/users");
}

#[test]
fn endpoint_paths_format_expected_routes() {
    assert_eq!(user_path("u-1"), "/users/u-1");
    assert_eq!(user_files_path("u-1"), "/users/u-1/files");
    assert_eq!(file_path("f-9"), "/files/f-9");
    assert_eq!(users_path(&UserListQuery::default()), "/users?page=1&limit=10");
}

#[test]
fn endpoint_paths_encode_ids_as_single_segments() {
    assert_eq!(user_path("a/b"), "/users/a%2Fb");
    assert_eq!(user_files_path("u?1#x"), "/users/u%3F1%23x/files");
    assert_eq!(file_path("my file+1"), "/files/my%20file%2B1");
    assert_eq!(user_path("USER-42_a.b"), "/users/USER-42_a.b");
}

#[test]
fn headers_include_json_content_type_and_fresh_bearer() {
    let backend = MemoryBackend::default();
    let client = client_with(backend.clone());

    let before = client.headers(&[]);
    assert_eq!(header(&before, "content-type"), Some("application/json"));
    assert_eq!(header(&before, "authorization"), None);

    backend.set_item(TOKEN_KEY, "abc").unwrap();
    let after = client.headers(&[]);
    assert_eq!(header(&after, "Authorization"), Some("Bearer abc"));
}

#[test]
fn caller_headers_override_defaults_case_insensitively() {
    let backend = MemoryBackend::default();
    backend.set_item(TOKEN_KEY, "abc").unwrap();
    let client = client_with(backend);

    let headers = client.headers(&[
        ("content-type".to_owned(), "text/plain".to_owned()),
        ("X-Trace".to_owned(), "1".to_owned()),
    ]);
    assert_eq!(headers.len(), 3);
    assert_eq!(header(&headers, "Content-Type"), Some("text/plain"));
    assert_eq!(header(&headers, "Authorization"), Some("Bearer abc"));
    assert_eq!(header(&headers, "x-trace"), Some("1"));
}

// =============================================================
// Response interpretation
// =============================================================

#[test]
fn non_success_status_carries_server_message() {
    let err = interpret_response::<serde_json::Value>(403, r#"{"success":false,"message":"Forbidden role"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 403, message: "Forbidden role".to_owned() });
    assert_eq!(err.user_message(), "Forbidden role");
}

#[test]
fn non_success_status_falls_back_to_generic_message() {
    for body in ["", "<html>502</html>", r#"{"message":""}"#, r#"{"success":false}"#] {
        let err = interpret_response::<serde_json::Value>(502, body).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: GENERIC_FAILURE.to_owned() });
    }
}

#[test]
fn success_status_decodes_envelope() {
    let body = r#"{"success":true,"status":1,"message":"ok","data":{"users":[],"pagination":{"page":2,"limit":5,"total":7,"totalPages":2}}}"#;
    let envelope = interpret_response::<UserListData>(200, body).unwrap();
    let data = envelope.into_data("x").unwrap();
    assert_eq!(data.pagination.page, 2);
    assert_eq!(data.pagination.total_pages, 2);
}

#[test]
fn success_status_with_garbage_body_is_decode_error() {
    let err = interpret_response::<UserListData>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.user_message(), "Unexpected response from server.");
}

#[test]
fn network_and_unavailable_use_connectivity_message() {
    assert_eq!(ApiError::Network("boom".to_owned()).user_message(), NETWORK_FAILURE);
    assert_eq!(ApiError::Unavailable.user_message(), NETWORK_FAILURE);
}

#[test]
fn request_options_json_serializes_body() {
    let opts = RequestOptions::json(&SignInRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() }).unwrap();
    assert_eq!(opts.body, Some(serde_json::json!({ "email": "a@b.com", "password": "pw" })));
    assert!(opts.headers.is_empty());
}

// =============================================================
// Sign-in
// =============================================================

fn sign_in_envelope(success: bool, status: i64, message: Option<&str>, expires_at: &str) -> Envelope<SignInData> {
    Envelope {
        success,
        status,
        message: message.map(str::to_owned),
        data: Some(SignInData {
            user: UserSummary { id: Some("u-1".to_owned()), email: Some("a@b.com".to_owned()), role: Some("admin".to_owned()) },
            token: "abc".to_owned(),
            expires_at: expires_at.to_owned(),
        }),
    }
}

#[test]
fn sign_in_envelope_builds_session() {
    let session = session_from_sign_in(sign_in_envelope(true, 1, None, "2030-01-01T00:00:00.000Z")).unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.expires_at, datetime!(2030-01-01 00:00 UTC));
    assert_eq!(session.user.role.as_deref(), Some("admin"));
}

#[test]
fn sign_in_requires_status_one() {
    let err = session_from_sign_in(sign_in_envelope(true, 0, Some("Account locked"), "2030-01-01T00:00:00Z")).unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: "Account locked".to_owned() });
}

#[test]
fn sign_in_failure_without_message_uses_fallback() {
    let err = session_from_sign_in(sign_in_envelope(false, 1, None, "2030-01-01T00:00:00Z")).unwrap_err();
    assert_eq!(err.user_message(), SIGN_IN_FAILURE);
}

#[test]
fn sign_in_rejects_unparseable_expiry() {
    let err = session_from_sign_in(sign_in_envelope(true, 1, None, "never")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn sign_in_decodes_backend_payload() {
    let body = r#"{
        "success": true,
        "status": 1,
        "message": "Signed in",
        "data": {
            "user": {"UserId":"u-1","Role":"admin","SK":"PROFILE","PK":"USER#u-1","CreatedAt":"2024-01-01","Email":"a@b.com"},
            "token": "tok",
            "expiresAt": "2030-01-01T00:00:00.000Z"
        }
    }"#;
    let envelope = interpret_response::<SignInData>(200, body).unwrap();
    let session = session_from_sign_in(envelope).unwrap();
    assert_eq!(session.user.email.as_deref(), Some("a@b.com"));
    assert_eq!(session.token, "tok");
}

#[test]
fn sign_in_error_status_without_message_uses_sign_in_fallback() {
    let err = interpret_sign_in(401, "{}").unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: SIGN_IN_FAILURE.to_owned() });
    assert_eq!(err.user_message(), "Sign-in failed. Please try again.");

    let err = interpret_sign_in(502, "<html>bad gateway</html>").unwrap_err();
    assert_eq!(err.user_message(), SIGN_IN_FAILURE);
}

#[test]
fn sign_in_error_status_keeps_server_message() {
    let err = interpret_sign_in(401, r#"{"success":false,"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn sign_in_rejection_with_empty_data_keeps_server_message() {
    let body = r#"{"success":false,"status":0,"message":"Invalid credentials","data":{}}"#;
    let err = interpret_sign_in(200, body).unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: "Invalid credentials".to_owned() });
}

#[test]
fn sign_in_rejection_with_partial_data_and_no_message_uses_fallback() {
    let body = r#"{"success":true,"status":0,"data":{"token":"abc"}}"#;
    assert_eq!(interpret_sign_in(200, body).unwrap_err().user_message(), SIGN_IN_FAILURE);
}

#[test]
fn sign_in_accepted_reply_builds_session() {
    let body = r#"{"success":true,"status":1,"data":{"user":{"Email":"a@b.com"},"token":"tok","expiresAt":"2030-01-01T00:00:00Z"}}"#;
    let session = interpret_sign_in(200, body).unwrap();
    assert_eq!(session.token, "tok");
    assert_eq!(session.expires_at, datetime!(2030-01-01 00:00 UTC));
}

#[test]
fn sign_in_accepted_reply_with_garbage_is_decode_error() {
    assert!(matches!(interpret_sign_in(200, "not json"), Err(ApiError::Decode(_))));
    let body = r#"{"success":true,"status":1,"data":{"token":"tok"}}"#;
    assert!(matches!(interpret_sign_in(200, body), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_outside_browser_are_unavailable() {
    let client = client_with(MemoryBackend::default());
    let result = futures::executor::block_on(client.get::<serde_json::Value>("/users"));
    assert_eq!(result.unwrap_err(), ApiError::Unavailable);

    let sign_in = futures::executor::block_on(client.sign_in("a@b.com", "pw"));
    assert_eq!(sign_in.unwrap_err(), ApiError::Unavailable);
    assert!(client.session().get().is_none());
}
