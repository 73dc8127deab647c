//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session::{AUTH_ENTRY_PATH, SessionHandle};

/// Redirect once the session check settled without a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to the auth entry page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: SessionHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.auth_state()) {
            navigate(AUTH_ENTRY_PATH, NavigateOptions::default());
        }
    });
}
