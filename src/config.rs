//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled:
//!
//! - `PORTAL_API_BASE`: origin prefix for API calls (default: same origin)
//! - `PORTAL_CACHE_RETRY`: retries for queries without an override (default 0)
//! - `PORTAL_CACHE_STALE_SECS`: freshness for queries without an override
//!   (default: cached data never goes stale on its own)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::query::options::Freshness;

pub const DEFAULT_CACHE_RETRY: u32 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every request path. Empty means same origin.
    pub api_base: String,
    /// Freshness applied to queries that do not declare their own.
    pub default_freshness: Freshness,
    /// Retry count applied to queries that do not declare their own.
    pub default_retry: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), default_freshness: Freshness::Forever, default_retry: DEFAULT_CACHE_RETRY }
    }
}

impl ClientConfig {
    /// Read the values captured by the compiler for this build.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTAL_API_BASE"),
            option_env!("PORTAL_CACHE_RETRY"),
            option_env!("PORTAL_CACHE_STALE_SECS"),
        )
    }

    /// Build a config from raw optional strings; malformed numbers fall back to defaults.
    pub fn from_values(api_base: Option<&str>, retry: Option<&str>, stale_secs: Option<&str>) -> Self {
        let api_base = api_base.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned();
        let default_retry = retry
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_CACHE_RETRY);
        let default_freshness = stale_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map_or(Freshness::Forever, |secs| Freshness::Window(Duration::from_secs(secs)));
        Self { api_base, default_freshness, default_retry }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
