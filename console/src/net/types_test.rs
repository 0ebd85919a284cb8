use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        user_id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        role: "admin".to_owned(),
        is_active: true,
        phone: Some("555".to_owned()),
        ..User::default()
    }
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_tolerates_missing_fields() {
    let envelope: Envelope<serde_json::Value> = serde_json::from_str("{}").unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.status, 0);
    assert!(envelope.message.is_none());
    assert!(envelope.data.is_none());
}

#[test]
fn into_data_returns_payload_on_success() {
    let envelope = Envelope { success: true, status: 1, message: None, data: Some(7) };
    assert_eq!(envelope.into_data("x"), Ok(7));
}

#[test]
fn into_data_uses_server_message_then_fallback() {
    let with_message = Envelope::<i32> { success: false, status: 0, message: Some("nope".to_owned()), data: None };
    assert_eq!(with_message.into_data("fallback"), Err(ApiError::Rejected { message: "nope".to_owned() }));

    let blank = Envelope::<i32> { success: false, status: 0, message: Some("  ".to_owned()), data: None };
    assert_eq!(blank.into_data("fallback"), Err(ApiError::Rejected { message: "fallback".to_owned() }));
}

#[test]
fn into_data_rejects_success_without_data() {
    let envelope = Envelope::<i32> { success: true, status: 1, message: None, data: None };
    assert!(envelope.into_data("empty").is_err());
}

#[test]
fn into_unit_only_checks_success() {
    let ok = Envelope::<serde_json::Value> { success: true, status: 1, message: None, data: None };
    assert_eq!(ok.into_unit("x"), Ok(()));
    let bad = Envelope::<serde_json::Value> { success: false, status: 0, message: None, data: None };
    assert_eq!(bad.into_unit("Failed to delete user"), Err(ApiError::Rejected { message: "Failed to delete user".to_owned() }));
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_decodes_pascal_case_record() {
    let raw = r#"{
        "UserId": "u-1", "Email": "a@b.com", "FirstName": "Ada", "Role": "user",
        "IsActive": false, "CreatedAt": "2024-01-01T00:00:00Z", "EntityType": "USER",
        "SocialLinks": {"twitter": "@ada"}
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.user_id, "u-1");
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert!(user.last_name.is_none());
    assert!(!user.is_active);
    assert_eq!(user.social_links.unwrap().twitter, "@ada");
}

#[test]
fn display_name_needs_both_names() {
    let mut user = make_user();
    assert_eq!(user.display_name(), "Ada Lovelace");
    user.last_name = None;
    assert_eq!(user.display_name(), "ada@example.com");
    user.last_name = Some(String::new());
    assert_eq!(user.display_name(), "ada@example.com");
}

#[test]
fn pagination_navigation_bounds() {
    let first = Pagination { page: 1, limit: 10, total: 25, total_pages: 3 };
    assert!(!first.has_previous());
    assert!(first.has_next());
    let last = Pagination { page: 3, ..first };
    assert!(last.has_previous());
    assert!(!last.has_next());
}

#[test]
fn list_query_includes_only_set_filters() {
    let query = UserListQuery { page: 2, limit: 25, role: Some("admin".to_owned()), is_active: Some(false) };
    assert_eq!(query.to_query_string(), "page=2&limit=25&role=admin&isActive=false");

    let blank_role = UserListQuery { role: Some(String::new()), ..UserListQuery::default() };
    assert_eq!(blank_role.to_query_string(), "page=1&limit=10");
}

#[test]
fn list_query_encodes_values() {
    let query = UserListQuery { role: Some("super admin&co".to_owned()), ..UserListQuery::default() };
    assert_eq!(query.to_query_string(), "page=1&limit=10&role=super+admin%26co");
}

#[test]
fn create_request_omits_unset_optionals() {
    let req = CreateUserRequest { email: "a@b.com".to_owned(), password: "pw".to_owned(), role: Some("user".to_owned()), ..CreateUserRequest::default() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw", "role": "user" })
    );
}

#[test]
fn update_request_is_camel_case_partial() {
    let req = UpdateUserRequest { first_name: Some("Ada".to_owned()), is_active: Some(true), ..UpdateUserRequest::default() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "firstName": "Ada", "isActive": true }));
}

#[test]
fn update_request_from_user_never_carries_password() {
    let req = UpdateUserRequest::from_user(&make_user());
    assert!(req.password.is_none());
    assert_eq!(req.role.as_deref(), Some("admin"));
    assert_eq!(req.is_active, Some(true));
}

#[test]
fn profile_update_fills_blanks_and_uses_pascal_case() {
    let update = ProfileUpdate::from_user(&make_user());
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["FirstName"], "Ada");
    assert_eq!(value["Phone"], "555");
    assert_eq!(value["Bio"], "");
    assert_eq!(value["SocialLinks"]["facebook"], "");
}

// =============================================================
// Files
// =============================================================

#[test]
fn file_item_decodes_with_sparse_fields() {
    let raw = r#"{"FileId":"f-1","FileName":"report.pdf","FileSize":2048,"MimeType":"application/pdf","ProcessingStatus":"completed","ProcessingSuccessRate":97.5}"#;
    let file: FileItem = serde_json::from_str(raw).unwrap();
    assert_eq!(file.file_id, "f-1");
    assert_eq!(file.file_size, 2048);
    assert!(file.file_extension.is_empty());
    assert!((file.processing_success_rate - 97.5).abs() < f64::EPSILON);
}
