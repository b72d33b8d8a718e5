//! Keyed, deduplicating query cache.
//!
//! A [`Query`] pairs a [`QueryKey`] (logical endpoint plus canonical
//! parameters) with the API call that produces its data. The process-wide
//! [`QueryClient`] caches results per key, shares in-flight requests and
//! notifies subscribers; [`use_query`] binds it to reactive page state.

pub mod client;
pub mod clock;
pub mod hook;
pub mod observer;

pub use client::{QueryClient, QueryEvent, QuerySnapshot, QuerySubscription};
pub use clock::{BrowserClock, Clock, ManualClock};
pub use hook::{provide_query_client, use_query, use_query_client, PageLoad, QueryResult};
pub use observer::{FetchTicket, ObserverGuard};

use crate::shared::api_utils::ApiError;
use futures::future::{FutureExt, LocalBoxFuture};
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Cache key. Parameters live in a `BTreeMap`, so the same set of
/// parameters always compares and hashes the same regardless of the order
/// they were added in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    scope: &'static str,
    params: BTreeMap<&'static str, String>,
}

impl QueryKey {
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            params: BTreeMap::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.insert(name, value.to_string());
        self
    }

    /// Adds the parameter only when it is set and not blank.
    pub fn param_opt<S: AsRef<str>>(self, name: &'static str, value: Option<S>) -> Self {
        match value {
            Some(v) if !v.as_ref().trim().is_empty() => {
                let trimmed = v.as_ref().trim().to_string();
                self.param(name, trimmed)
            }
            _ => self,
        }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, name, value)?;
        }
        Ok(())
    }
}

/// Per-query cache policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// Age after which a successful entry is refetched on next use.
    pub stale_time_ms: f64,
    /// Refetch on a fixed timer while observed, regardless of staleness.
    pub refetch_interval_ms: Option<u32>,
    /// Extra attempts for retryable failures.
    pub retry: u8,
}

impl QueryOptions {
    pub const DEFAULT_STALE_MS: f64 = 60_000.0;
    pub const ALERTS_REFETCH_MS: u32 = 60_000;

    /// Options for data polled on a timer, such as alerts.
    pub fn polling(interval_ms: u32) -> Self {
        Self {
            refetch_interval_ms: Some(interval_ms),
            ..Self::default()
        }
    }

    pub fn alerts() -> Self {
        Self::polling(Self::ALERTS_REFETCH_MS)
    }

    pub fn with_stale_time(mut self, ms: f64) -> Self {
        self.stale_time_ms = ms;
        self
    }

    pub fn with_retry(mut self, retry: u8) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time_ms: Self::DEFAULT_STALE_MS,
            refetch_interval_ms: None,
            retry: 1,
        }
    }
}

type Fetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, ApiError>>>;

/// A key together with the API call that fills it.
pub struct Query<T> {
    key: QueryKey,
    fetcher: Fetcher<T>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<T: 'static> Query<T> {
    pub fn new<F, Fut>(key: QueryKey, fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        Self {
            key,
            fetcher: Rc::new(move || fetch().boxed_local()),
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub(crate) fn call(&self) -> LocalBoxFuture<'static, Result<T, ApiError>> {
        (self.fetcher)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(key: &QueryKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_parameter_order_does_not_matter() {
        let a = QueryKey::new("sales-by-period").param("period", "30d").param("groupby", "day");
        let b = QueryKey::new("sales-by-period").param("groupby", "day").param("period", "30d");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), "sales-by-period?groupby=day&period=30d");
    }

    #[test]
    fn test_different_period_is_a_different_key() {
        let a = QueryKey::new("dashboard-kpis").param("period", "30d");
        let b = QueryKey::new("dashboard-kpis").param("period", "7d");
        assert_ne!(a, b);
    }

    #[test]
    fn test_blank_optional_params_are_skipped() {
        let key = QueryKey::new("customers-list")
            .param("page", 1)
            .param_opt("segment", Some("  "))
            .param_opt("search", None::<&str>)
            .param_opt("channel", Some(" Email "));
        assert_eq!(key.get("segment"), None);
        assert_eq!(key.get("channel"), Some("Email"));
        assert_eq!(key, QueryKey::new("customers-list").param("channel", "Email").param("page", 1));
    }

    #[test]
    fn test_alert_options_poll_every_minute() {
        let options = QueryOptions::alerts();
        assert_eq!(options.refetch_interval_ms, Some(60_000));
        assert_eq!(options.stale_time_ms, QueryOptions::DEFAULT_STALE_MS);
    }
}
