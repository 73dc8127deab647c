//! Session reader: who is signed in, and how to sign out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity lives only in the [`ResourceCache`] under the `/api/auth/me`
//! key. An anonymous visitor is a valid state, so a 401 resolves to `None`
//! instead of an error.
//!
//! ORDERING
//! ========
//! Logout writes `None` into the cache only after the server acknowledged the
//! sign-out, and navigates only after that write. Any session fetch still in
//! flight started before the write and is discarded by the cache.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::error::FetchError;
use crate::net::api::{AUTH_ME_PATH, ApiClient};
use crate::net::types::User;
use crate::query::cache::ResourceCache;
use crate::query::hook::use_query;
use crate::query::key::QueryKey;
use crate::query::options::QueryOptions;
use crate::query::status::FetchStatus;
use crate::state::auth::AuthState;
use crate::util::navigate::Navigator;

/// How long a resolved identity is served without asking the server again.
pub const SESSION_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// Authentication entry page; logout lands here.
pub const AUTH_ENTRY_PATH: &str = "/auth";

pub fn session_key() -> QueryKey {
    QueryKey::new([AUTH_ME_PATH])
}

/// Five-minute freshness, no retry, 401 resolves to "no session".
pub fn session_options() -> QueryOptions<Option<User>> {
    QueryOptions::default()
        .fresh_for(SESSION_FRESHNESS)
        .retry(0)
        .resolve_unauthorized(None)
}

/// True only for a resolved, present identity.
pub fn is_authenticated(status: &FetchStatus<Option<User>>) -> bool {
    matches!(status, FetchStatus::Success(Some(_)))
}

/// Session operations over an injected cache and API client.
#[derive(Clone, Debug)]
pub struct SessionReader {
    cache: ResourceCache,
    api: ApiClient,
}

impl SessionReader {
    pub fn new(cache: ResourceCache, api: ApiClient) -> Self {
        Self { cache, api }
    }

    /// Cache-aware identity check.
    pub async fn get_session(&self) -> FetchStatus<Option<User>> {
        self.cache
            .query(&session_key(), &session_options(), || {
                let api = self.api.clone();
                async move { api.current_user().await.map(Some) }
            })
            .await
    }

    /// Whatever the cache holds right now; `Pending` if nothing was stored yet.
    pub fn cached_session(&self) -> FetchStatus<Option<User>> {
        self.cache.status(&session_key())
    }

    pub fn is_authenticated(&self) -> bool {
        is_authenticated(&self.cached_session())
    }

    /// Sign out on the server, clear the cached identity, then navigate.
    ///
    /// # Errors
    ///
    /// Returns the request failure; the cached session and route are untouched.
    pub async fn logout(&self, navigator: &impl Navigator) -> Result<(), FetchError> {
        if let Err(err) = self.api.logout().await {
            leptos::logging::warn!("logout failed: {err}");
            return Err(err);
        }
        self.cache.write(&session_key(), None::<User>);
        navigator.go_to(AUTH_ENTRY_PATH);
        Ok(())
    }
}

/// Reactive session view for components.
#[derive(Clone)]
pub struct SessionHandle {
    pub status: ReadSignal<FetchStatus<Option<User>>>,
    reader: SessionReader,
}

impl SessionHandle {
    /// Tracked read of the current auth projection.
    pub fn auth_state(&self) -> AuthState {
        self.status.with(AuthState::from_status)
    }

    /// Tracked read of [`is_authenticated`].
    pub fn is_authenticated(&self) -> bool {
        self.status.with(is_authenticated)
    }

    /// Fire-and-forget logout for event handlers; failures are logged.
    pub fn logout(&self, navigator: impl Navigator + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let reader = self.reader.clone();
            leptos::task::spawn_local(async move {
                // `SessionReader::logout` already logged the failure; the
                // session and the current route are left as they were.
                reader.logout(&navigator).await.ok();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.reader, navigator);
        }
    }
}

/// Subscribe the calling component to the session query.
pub fn use_session() -> SessionHandle {
    let cache = expect_context::<ResourceCache>();
    let api = expect_context::<ApiClient>();

    let fetch_api = api.clone();
    let status = use_query(session_key, session_options(), move |_key| {
        let api = fetch_api.clone();
        async move { api.current_user().await.map(Some) }
    });

    SessionHandle { status, reader: SessionReader::new(cache, api) }
}
