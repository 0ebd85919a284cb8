use super::*;

#[test]
fn nav_items_point_at_protected_routes() {
    let paths: Vec<&str> = NAV_ITEMS.iter().map(|(_, p)| *p).collect();
    assert_eq!(paths, vec!["/dashboard", "/users", "/profile-admin", "/settings-admin"]);
}

#[test]
fn nav_active_matches_exact_and_nested_paths() {
    assert!(is_nav_active("/users", "/users"));
    assert!(is_nav_active("/users", "/users/u-1/files"));
    assert!(!is_nav_active("/users", "/users-archive"));
    assert!(!is_nav_active("/dashboard", "/users"));
}
