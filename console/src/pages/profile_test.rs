use super::*;

#[test]
fn heading_prefers_full_name() {
    let form = ProfileUpdate {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        ..ProfileUpdate::default()
    };
    assert_eq!(profile_heading(&form), "Ada Lovelace");
}

#[test]
fn heading_uses_single_name_or_email() {
    let mut form = ProfileUpdate { first_name: " Ada ".to_owned(), email: "ada@example.com".to_owned(), ..ProfileUpdate::default() };
    assert_eq!(profile_heading(&form), "Ada");
    form.first_name.clear();
    assert_eq!(profile_heading(&form), "ada@example.com");
}
