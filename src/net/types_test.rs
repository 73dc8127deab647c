use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: Some("ada@example.com".to_owned()),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        profile_image_url: None,
    }
}

#[test]
fn user_deserializes_camel_case_and_missing_optionals() {
    let parsed: User = serde_json::from_str(r#"{"id":"u1","firstName":"Ada","profileImageUrl":"https://img"}"#).unwrap();
    assert_eq!(parsed.id, "u1");
    assert_eq!(parsed.first_name.as_deref(), Some("Ada"));
    assert_eq!(parsed.profile_image_url.as_deref(), Some("https://img"));
    assert!(parsed.email.is_none());
    assert!(parsed.last_name.is_none());
}

#[test]
fn display_name_prefers_full_name() {
    assert_eq!(user().display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let mut u = user();
    u.first_name = None;
    u.last_name = Some("  ".to_owned());
    assert_eq!(u.display_name(), "ada@example.com");

    u.email = None;
    assert_eq!(u.display_name(), "u1");
}

#[test]
fn document_type_parse_is_exact() {
    assert_eq!(DocumentType::parse("terms"), Some(DocumentType::Terms));
    assert_eq!(DocumentType::parse("privacy"), Some(DocumentType::Privacy));
    assert_eq!(DocumentType::parse("eula"), Some(DocumentType::Eula));
    assert_eq!(DocumentType::parse("EULA"), None);
    assert_eq!(DocumentType::parse("foo"), None);
}

#[test]
fn document_titles_and_slugs() {
    for kind in DocumentType::ALL {
        assert_eq!(DocumentType::parse(kind.slug()), Some(kind));
    }
    assert_eq!(DocumentType::Terms.title(), "Terms of Service");
    assert_eq!(DocumentType::Privacy.title(), "Privacy Policy");
    assert_eq!(DocumentType::Eula.title(), "End User License Agreement");
}
