//! Reactive bridge between [`ResourceCache`] and Leptos components.
//!
//! The returned signal starts `Pending` (or with the last cached value while a
//! stale entry is refetched), follows direct cache writes for the active key,
//! and refetches when that key is invalidated. Effects only run in the
//! browser, so server rendering always emits the pending state.
//!
//! Fetches outlive the component that started them. Every signal access from a
//! cache callback or a finished fetch goes through the `try_*` accessors, and a
//! disposed signal means the result is dropped.

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;

use super::cache::{CacheEvent, ResourceCache};
use super::key::QueryKey;
use super::options::QueryOptions;
use super::status::FetchStatus;
use crate::error::FetchError;

/// What a component does with one cache notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventAction {
    /// Re-read the stored value into the status signal.
    Refresh,
    /// Run the fetch again.
    Refetch,
    Ignore,
}

impl EventAction {
    pub fn for_event(active: Option<&QueryKey>, event: &CacheEvent) -> Self {
        if active != Some(event.key()) {
            return Self::Ignore;
        }
        match event {
            CacheEvent::Updated(_) => Self::Refresh,
            CacheEvent::Invalidated(_) => Self::Refetch,
        }
    }
}

/// A result for `resolved` is only shown while it is still the active key.
pub fn should_apply(active: Option<&QueryKey>, resolved: &QueryKey) -> bool {
    active == Some(resolved)
}

/// Publish a finished fetch for `key`.
///
/// Returns `false` when the result was dropped: the key moved on, or the
/// owning component is gone and its signals were disposed.
pub fn deliver<T>(
    active_key: RwSignal<Option<QueryKey>>,
    status: RwSignal<FetchStatus<T>>,
    key: &QueryKey,
    result: FetchStatus<T>,
) -> bool
where
    T: Send + Sync + 'static,
{
    let Some(active) = active_key.try_get_untracked() else {
        return false;
    };
    if !should_apply(active.as_ref(), key) {
        return false;
    }
    status.try_set(result).is_none()
}

/// Subscribe a component to the resource identified by `key`.
///
/// `key` is re-evaluated reactively (e.g. from route params). A result that
/// resolves after the key has moved on, or after the component unmounted, is
/// dropped.
pub fn use_query<T, K, F, Fut>(key: K, options: QueryOptions<T>, fetcher: F) -> ReadSignal<FetchStatus<T>>
where
    T: Clone + Send + Sync + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(QueryKey) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let cache = expect_context::<ResourceCache>();
    let status = RwSignal::new(FetchStatus::<T>::Pending);
    let active_key = RwSignal::new(None::<QueryKey>);
    let refetch = RwSignal::new(0_u64);

    let listener_cache = cache.clone();
    let subscription = cache.subscribe(move |event| {
        let Some(active) = active_key.try_get_untracked() else {
            return;
        };
        match EventAction::for_event(active.as_ref(), event) {
            EventAction::Refresh => {
                if let Some(value) = listener_cache.peek::<T>(event.key()) {
                    status.try_set(FetchStatus::Success(value));
                }
            }
            EventAction::Refetch => {
                refetch.try_update(|n| *n = n.wrapping_add(1));
            }
            EventAction::Ignore => {}
        }
    });
    let cleanup_cache = cache.clone();
    on_cleanup(move || cleanup_cache.unsubscribe(subscription));

    let options = Arc::new(options);
    Effect::new(move || {
        refetch.track();
        let key = key();
        active_key.set(Some(key.clone()));

        if let Some(value) = cache.fresh::<T>(&key, cache.effective_freshness(&options)) {
            status.set(FetchStatus::Success(value));
            return;
        }
        status.set(cache.status::<T>(&key));

        #[cfg(feature = "hydrate")]
        {
            let cache = cache.clone();
            let options = Arc::clone(&options);
            let fetcher = fetcher.clone();
            leptos::task::spawn_local(async move {
                let result = cache.query(&key, &options, || fetcher(key.clone())).await;
                if !deliver(active_key, status, &key, result) {
                    leptos::logging::log!("query {key} resolved after its reader moved on; dropped");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &fetcher;
        }
    });

    status.read_only()
}
