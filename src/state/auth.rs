//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::FetchError;
use crate::net::types::User;
use crate::query::status::FetchStatus;

/// Authentication state tracking the current user and loading status.
///
/// A projection of the session query; never stored on its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Set when the identity check itself failed (not for a plain 401).
    pub error: Option<FetchError>,
}

impl AuthState {
    pub fn from_status(status: &FetchStatus<Option<User>>) -> Self {
        match status {
            FetchStatus::Pending => Self { user: None, loading: true, error: None },
            FetchStatus::Success(user) => Self { user: user.clone(), loading: false, error: None },
            FetchStatus::Error(err) => Self { user: None, loading: false, error: Some(err.clone()) },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
