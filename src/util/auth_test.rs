use super::*;
use crate::error::FetchError;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false, error: None };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true, error: None };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: Some("ada@example.com".to_owned()),
            first_name: Some("Ada".to_owned()),
            last_name: None,
            profile_image_url: None,
        }),
        loading: false,
        error: None,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn failed_identity_check_also_redirects() {
    let state = AuthState { user: None, loading: false, error: Some(FetchError::status(500, "")) };
    assert!(should_redirect_unauth(&state));
}
