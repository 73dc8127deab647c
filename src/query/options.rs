//! Per-query policy: freshness, retry, and 401 handling.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::time::Duration;

const RETRY_BASE_DELAY_MS: u64 = 1_000;
const RETRY_MAX_DELAY_MS: u64 = 30_000;

/// How long a stored value may be served without refetching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    /// Fresh while younger than the window.
    Window(Duration),
    /// Fresh until written over or invalidated.
    Forever,
}

impl Freshness {
    pub fn is_fresh(self, age_ms: u64) -> bool {
        match self {
            Self::Forever => true,
            Self::Window(window) => u128::from(age_ms) < window.as_millis(),
        }
    }
}

/// What a query resolves to when the server answers 401.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UnauthorizedPolicy<T> {
    /// Surface the 401 like any other failed status.
    #[default]
    Error,
    /// Resolve successfully with this value and cache it.
    Resolve(T),
}

/// Overrides for one query. `None` fields use the cache's configured defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions<T> {
    pub freshness: Option<Freshness>,
    pub retry: Option<u32>,
    pub on_unauthorized: UnauthorizedPolicy<T>,
}

impl<T> Default for QueryOptions<T> {
    fn default() -> Self {
        Self { freshness: None, retry: None, on_unauthorized: UnauthorizedPolicy::Error }
    }
}

impl<T> QueryOptions<T> {
    #[must_use]
    pub fn fresh_for(mut self, window: Duration) -> Self {
        self.freshness = Some(Freshness::Window(window));
        self
    }

    #[must_use]
    pub fn retry(mut self, attempts: u32) -> Self {
        self.retry = Some(attempts);
        self
    }

    #[must_use]
    pub fn resolve_unauthorized(mut self, value: T) -> Self {
        self.on_unauthorized = UnauthorizedPolicy::Resolve(value);
        self
    }
}

/// Backoff before retry number `attempt` (zero-based): 1s, 2s, 4s, ... capped at 30s.
pub fn retry_delay(attempt: u32) -> Duration {
    let factor = 1_u64.checked_shl(attempt).unwrap_or(u64::MAX);
    Duration::from_millis(RETRY_BASE_DELAY_MS.saturating_mul(factor).min(RETRY_MAX_DELAY_MS))
}
