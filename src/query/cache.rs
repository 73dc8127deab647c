//! Injectable in-memory resource cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ResourceCache` is created by the app root and handed to pages through
//! Leptos context. Values are opaque snapshots replaced whole under a key;
//! nothing is ever patched in place.
//!
//! DESIGN
//! ======
//! Every key carries a generation counter bumped by writes, invalidations, and
//! stored fetch results. A fetch remembers the generation it started from and
//! only stores its result if nothing touched the key in the meantime, so a
//! slow request can never clobber a later direct write (e.g. logout).

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use super::clock::{Clock, SystemClock};
use super::key::QueryKey;
use super::options::{Freshness, QueryOptions, UnauthorizedPolicy, retry_delay};
use super::status::FetchStatus;
use crate::config::ClientConfig;
use crate::error::FetchError;

type Value = Arc<dyn Any + Send + Sync>;
type Listener = Arc<dyn Fn(&CacheEvent) + Send + Sync>;

/// Change notification delivered to subscribers after the cache lock is released.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheEvent {
    /// A new value was stored, by a fetch or a direct write.
    Updated(QueryKey),
    /// The value was marked stale and should be refetched by active readers.
    Invalidated(QueryKey),
}

impl CacheEvent {
    pub fn key(&self) -> &QueryKey {
        match self {
            Self::Updated(key) | Self::Invalidated(key) => key,
        }
    }
}

/// Handle returned by [`ResourceCache::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Entry {
    value: Option<Value>,
    updated_at_ms: u64,
    invalidated: bool,
    generation: u64,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    items: Vec<(SubscriptionId, Listener)>,
}

/// Shared key-value store of fetched resources.
///
/// Cloning is cheap; clones share the same entries and subscribers.
#[derive(Clone)]
pub struct ResourceCache {
    entries: Arc<RwLock<HashMap<QueryKey, Entry>>>,
    listeners: Arc<RwLock<Listeners>>,
    clock: Arc<dyn Clock>,
    default_freshness: Freshness,
    default_retry: u32,
}

impl std::fmt::Debug for ResourceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceCache")
            .field("default_freshness", &self.default_freshness)
            .field("default_retry", &self.default_retry)
            .finish_non_exhaustive()
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl ResourceCache {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &ClientConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::default(),
            listeners: Arc::default(),
            clock,
            default_freshness: config.default_freshness,
            default_retry: config.default_retry,
        }
    }

    /// Serve `key` from cache when fresh, otherwise run `fetcher` and store the result.
    ///
    /// Failures are retried with backoff up to the effective retry count, except
    /// 401s, which are final and resolved through `options.on_unauthorized`.
    /// Errors are never stored; a previously cached value survives them.
    pub async fn query<T, F, Fut>(&self, key: &QueryKey, options: &QueryOptions<T>, fetcher: F) -> FetchStatus<T>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        if let Some(value) = self.fresh::<T>(key, self.effective_freshness(options)) {
            return FetchStatus::Success(value);
        }

        let started_at = self.generation(key);
        let retries = options.retry.unwrap_or(self.default_retry);
        let mut attempt = 0;
        let result = loop {
            match fetcher().await {
                Ok(value) => break Ok(value),
                Err(err) if err.is_unauthorized() || attempt >= retries => break Err(err),
                Err(err) => {
                    let delay = retry_delay(attempt);
                    leptos::logging::warn!("query {key} failed ({err}); retry {} in {delay:?}", attempt + 1);
                    backoff(delay).await;
                    attempt += 1;
                }
            }
        };

        let result = match (result, &options.on_unauthorized) {
            (Err(err), UnauthorizedPolicy::Resolve(value)) if err.is_unauthorized() => Ok(value.clone()),
            (other, _) => other,
        };

        match result {
            Ok(value) => {
                if self.store_if_current(key, started_at, &value) {
                    self.notify(&CacheEvent::Updated(key.clone()));
                    FetchStatus::Success(value)
                } else {
                    leptos::logging::log!("query {key} superseded while in flight; keeping cached value");
                    FetchStatus::Success(self.peek(key).unwrap_or(value))
                }
            }
            Err(err) => {
                leptos::logging::warn!("query {key} failed: {err}");
                FetchStatus::Error(err)
            }
        }
    }

    /// Overwrite the value under `key`; it counts as freshly fetched.
    pub fn write<T: Send + Sync + 'static>(&self, key: &QueryKey, value: T) {
        let now = self.clock.now_ms();
        {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            let entry = entries.entry(key.clone()).or_default();
            let value: Value = Arc::new(value);
            entry.value = Some(value);
            entry.updated_at_ms = now;
            entry.invalidated = false;
            entry.generation += 1;
        }
        self.notify(&CacheEvent::Updated(key.clone()));
    }

    /// Mark `key` stale. The value stays readable until a refetch replaces it.
    pub fn invalidate(&self, key: &QueryKey) {
        {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            let entry = entries.entry(key.clone()).or_default();
            entry.invalidated = true;
            entry.generation += 1;
        }
        self.notify(&CacheEvent::Invalidated(key.clone()));
    }

    /// Current value regardless of freshness. `None` if absent or of another type.
    pub fn peek<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).and_then(|entry| downcast(entry.value.as_ref()?))
    }

    /// Current value if it is still fresh under `freshness` and not invalidated.
    pub fn fresh<T: Clone + 'static>(&self, key: &QueryKey, freshness: Freshness) -> Option<T> {
        let now = self.clock.now_ms();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if entry.invalidated || !freshness.is_fresh(now.saturating_sub(entry.updated_at_ms)) {
            return None;
        }
        downcast(entry.value.as_ref()?)
    }

    /// Synchronous status view: `Success` once a value exists, `Pending` before.
    pub fn status<T: Clone + 'static>(&self, key: &QueryKey) -> FetchStatus<T> {
        self.peek(key).map_or(FetchStatus::Pending, FetchStatus::Success)
    }

    /// The freshness a query with `options` will be held to.
    pub fn effective_freshness<T>(&self, options: &QueryOptions<T>) -> Freshness {
        options.freshness.unwrap_or(self.default_freshness)
    }

    pub fn subscribe(&self, listener: impl Fn(&CacheEvent) + Send + Sync + 'static) -> SubscriptionId {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        listeners.next_id += 1;
        let id = SubscriptionId(listeners.next_id);
        listeners.items.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        listeners.items.retain(|(existing, _)| *existing != id);
    }

    fn generation(&self, key: &QueryKey) -> u64 {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).map_or(0, |entry| entry.generation)
    }

    fn store_if_current<T: Clone + Send + Sync + 'static>(&self, key: &QueryKey, started_at: u64, value: &T) -> bool {
        let now = self.clock.now_ms();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(key.clone()).or_default();
        if entry.generation != started_at {
            return false;
        }
        let value: Value = Arc::new(value.clone());
        entry.value = Some(value);
        entry.updated_at_ms = now;
        entry.invalidated = false;
        entry.generation += 1;
        true
    }

    fn notify(&self, event: &CacheEvent) {
        let snapshot: Vec<Listener> = {
            let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
            listeners.items.iter().map(|(_, listener)| Arc::clone(listener)).collect()
        };
        for listener in snapshot {
            listener(event);
        }
    }
}

fn downcast<T: Clone + 'static>(value: &Value) -> Option<T> {
    (**value).downcast_ref::<T>().cloned()
}

async fn backoff(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
