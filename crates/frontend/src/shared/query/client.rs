use super::clock::{BrowserClock, Clock};
use super::{Query, QueryKey, QueryOptions};
use crate::shared::api_utils::ApiError;
use futures::future::{self, FutureExt, LocalBoxFuture, Shared};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

type ErasedData = Rc<dyn Any>;
type Flight = Shared<LocalBoxFuture<'static, Result<ErasedData, ApiError>>>;
type Listener = Rc<dyn Fn(&QueryEvent)>;

/// A poll tick counts as due this long before the full interval elapsed,
/// so timers that fire slightly early do not skip a whole period.
const POLL_SLACK_MS: f64 = 1_000.0;

/// How long an entry nobody observes is kept before eviction.
pub const DEFAULT_GC_TIME_MS: f64 = 300_000.0;

/// Change notification delivered to subscribers of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEvent {
    /// A request for the key settled, successfully or not.
    Updated,
    /// Cached data was marked stale and should be refetched by observers.
    Invalidated,
}

/// Point-in-time view of one cache entry.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub is_fetching: bool,
    pub updated_at: Option<f64>,
    pub is_stale: bool,
}

#[derive(Default)]
struct CacheEntry {
    data: Option<ErasedData>,
    error: Option<ApiError>,
    updated_at: Option<f64>,
    started_at: Option<f64>,
    invalidated: bool,
    refetch_after_flight: bool,
    in_flight: Option<Flight>,
    fetch_count: u32,
    // Last request start, settle or observer departure.
    last_active: f64,
}

impl CacheEntry {
    fn is_fresh(&self, now: f64, options: &QueryOptions) -> bool {
        if self.data.is_none() || self.error.is_some() || self.invalidated {
            return false;
        }
        match self.updated_at {
            Some(at) => now - at < options.stale_time_ms,
            None => false,
        }
    }
}

struct ClientState {
    clock: Rc<dyn Clock>,
    entries: HashMap<QueryKey, CacheEntry>,
    listeners: HashMap<QueryKey, Vec<(u64, Listener)>>,
    next_listener: u64,
    gc_time_ms: f64,
}

impl ClientState {
    fn listeners_for(&self, key: &QueryKey) -> Vec<Listener> {
        self.listeners
            .get(key)
            .map(|list| list.iter().map(|(_, l)| l.clone()).collect())
            .unwrap_or_default()
    }

    /// Drop entries with no observers and no request underway that have
    /// been idle for at least the GC time.
    fn collect_garbage(&mut self) {
        let now = self.clock.now_ms();
        let gc_time_ms = self.gc_time_ms;
        let listeners = &self.listeners;
        let before = self.entries.len();
        self.entries.retain(|key, entry| {
            entry.in_flight.is_some() || listeners.contains_key(key) || now - entry.last_active < gc_time_ms
        });
        let evicted = before - self.entries.len();
        if evicted > 0 {
            log::debug!("query cache evicted {} idle entries", evicted);
        }
    }
}

/// Process-wide cache of API results keyed by [`QueryKey`].
///
/// Concurrent requests for one key share a single network call. Successful
/// results stay fresh for [`QueryOptions::stale_time_ms`]; invalidation
/// marks entries stale and tells observers to refetch.
#[derive(Clone)]
pub struct QueryClient {
    inner: Rc<RefCell<ClientState>>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(BrowserClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ClientState {
                clock,
                entries: HashMap::new(),
                listeners: HashMap::new(),
                next_listener: 0,
                gc_time_ms: DEFAULT_GC_TIME_MS,
            })),
        }
    }

    pub fn with_gc_time(self, gc_time_ms: f64) -> Self {
        self.inner.borrow_mut().gc_time_ms = gc_time_ms;
        self
    }

    pub fn is_fresh(&self, key: &QueryKey, options: &QueryOptions) -> bool {
        let state = self.inner.borrow();
        let now = state.clock.now_ms();
        state
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_fresh(now, options))
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.inner
            .borrow()
            .entries
            .get(key)
            .is_some_and(|entry| entry.in_flight.is_some())
    }

    /// Neither fresh data nor a request underway.
    pub fn needs_fetch(&self, key: &QueryKey, options: &QueryOptions) -> bool {
        !self.is_fresh(key, options) && !self.is_fetching(key)
    }

    /// Whether a polling observer should refetch now. Measured from the
    /// start of the last request so slow responses do not stretch the period.
    pub fn is_poll_due(&self, key: &QueryKey, interval_ms: u32) -> bool {
        let state = self.inner.borrow();
        let now = state.clock.now_ms();
        match state.entries.get(key).and_then(|entry| entry.started_at) {
            Some(started) => now - started >= f64::from(interval_ms) - POLL_SLACK_MS,
            None => true,
        }
    }

    /// Cached data when fresh, otherwise the (possibly shared) request.
    pub fn fetch<T: Clone + 'static>(
        &self,
        query: &Query<T>,
        options: &QueryOptions,
    ) -> LocalBoxFuture<'static, Result<T, ApiError>> {
        if self.is_fresh(query.key(), options) {
            if let Some(cached) = self.peek::<T>(query.key()) {
                log::debug!("query cache hit: {}", query.key());
                return future::ready(Ok(cached)).boxed_local();
            }
        }
        self.run(query, options)
    }

    /// Ignore freshness. Still joins a request that is already underway.
    pub fn refetch<T: Clone + 'static>(
        &self,
        query: &Query<T>,
        options: &QueryOptions,
    ) -> LocalBoxFuture<'static, Result<T, ApiError>> {
        self.run(query, options)
    }

    fn run<T: Clone + 'static>(
        &self,
        query: &Query<T>,
        options: &QueryOptions,
    ) -> LocalBoxFuture<'static, Result<T, ApiError>> {
        let key = query.key().clone();
        let flight = {
            let mut state = self.inner.borrow_mut();
            state.collect_garbage();
            let now = state.clock.now_ms();
            let entry = state.entries.entry(key.clone()).or_default();
            entry.last_active = now;
            if let Some(flight) = entry.in_flight.clone() {
                log::debug!("joining in-flight request: {}", key);
                flight
            } else {
                log::debug!("fetching {}", key);
                let flight = fetch_with_retry(query.clone(), options.retry, Rc::downgrade(&self.inner))
                    .boxed_local()
                    .shared();
                entry.started_at = Some(now);
                entry.in_flight = Some(flight.clone());
                flight
            }
        };
        async move {
            let data = flight.await?;
            downcast::<T>(&data, &key)
        }
        .boxed_local()
    }

    /// Cached data regardless of freshness.
    pub fn peek<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let state = self.inner.borrow();
        let data = state.entries.get(key)?.data.as_ref()?;
        data.downcast_ref::<T>().cloned()
    }

    pub fn snapshot<T: Clone + 'static>(&self, key: &QueryKey, options: &QueryOptions) -> QuerySnapshot<T> {
        let state = self.inner.borrow();
        let now = state.clock.now_ms();
        match state.entries.get(key) {
            Some(entry) => QuerySnapshot {
                data: entry
                    .data
                    .as_ref()
                    .and_then(|data| data.downcast_ref::<T>().cloned()),
                error: entry.error.clone(),
                is_fetching: entry.in_flight.is_some(),
                updated_at: entry.updated_at,
                is_stale: !entry.is_fresh(now, options),
            },
            None => QuerySnapshot {
                data: None,
                error: None,
                is_fetching: false,
                updated_at: None,
                is_stale: true,
            },
        }
    }

    pub fn invalidate(&self, key: &QueryKey) {
        self.invalidate_where(|candidate| candidate == key);
    }

    /// Every key of one logical endpoint, whatever its parameters.
    pub fn invalidate_scope(&self, scope: &str) {
        self.invalidate_where(|candidate| candidate.scope() == scope);
    }

    pub fn invalidate_all(&self) {
        self.invalidate_where(|_| true);
    }

    fn invalidate_where(&self, matches: impl Fn(&QueryKey) -> bool) {
        let listeners: Vec<Listener> = {
            let mut state = self.inner.borrow_mut();
            let mut settled = Vec::new();
            for (key, entry) in state.entries.iter_mut() {
                if !matches(key) {
                    continue;
                }
                entry.invalidated = true;
                // Observers hear about it once the running request settles.
                if entry.in_flight.is_some() {
                    entry.refetch_after_flight = true;
                } else {
                    settled.push(key.clone());
                }
            }
            settled
                .iter()
                .flat_map(|key| state.listeners_for(key))
                .collect()
        };
        notify(&listeners, QueryEvent::Invalidated);
    }

    /// Register for events on `key`. Dropping the handle unsubscribes.
    pub fn subscribe(&self, key: QueryKey, listener: impl Fn(&QueryEvent) + 'static) -> QuerySubscription {
        let mut state = self.inner.borrow_mut();
        state.next_listener += 1;
        let id = state.next_listener;
        state
            .listeners
            .entry(key.clone())
            .or_default()
            .push((id, Rc::new(listener)));
        state.collect_garbage();
        QuerySubscription {
            state: Rc::downgrade(&self.inner),
            key,
            id,
        }
    }

    pub fn observer_count(&self, key: &QueryKey) -> usize {
        self.inner
            .borrow()
            .listeners
            .get(key)
            .map_or(0, Vec::len)
    }

    /// Fetcher invocations for `key`, retries included.
    pub fn fetch_count(&self, key: &QueryKey) -> u32 {
        self.inner
            .borrow()
            .entries
            .get(key)
            .map_or(0, |entry| entry.fetch_count)
    }

    /// Evict idle entries now instead of on the next subscribe or request.
    pub fn collect_garbage(&self) {
        self.inner.borrow_mut().collect_garbage();
    }

    pub fn entry_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
    }
}

/// Handle returned by [`QueryClient::subscribe`].
pub struct QuerySubscription {
    state: Weak<RefCell<ClientState>>,
    key: QueryKey,
    id: u64,
}

impl Drop for QuerySubscription {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let Ok(mut state) = state.try_borrow_mut() else {
            log::warn!("could not unsubscribe from {}: cache is busy", self.key);
            return;
        };
        if let Some(list) = state.listeners.get_mut(&self.key) {
            list.retain(|(id, _)| *id != self.id);
            if list.is_empty() {
                state.listeners.remove(&self.key);
                let now = state.clock.now_ms();
                if let Some(entry) = state.entries.get_mut(&self.key) {
                    entry.last_active = now;
                }
            }
        }
    }
}

fn notify(listeners: &[Listener], event: QueryEvent) {
    for listener in listeners {
        listener(&event);
    }
}

fn downcast<T: Clone + 'static>(data: &ErasedData, key: &QueryKey) -> Result<T, ApiError> {
    data.downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| ApiError::Decode(format!("cached value for {} has an unexpected type", key)))
}

async fn fetch_with_retry<T: 'static>(
    query: Query<T>,
    retry: u8,
    state: Weak<RefCell<ClientState>>,
) -> Result<ErasedData, ApiError> {
    let key = query.key().clone();
    let mut attempt: u8 = 0;
    let result = loop {
        if let Some(state) = state.upgrade() {
            state.borrow_mut().entries.entry(key.clone()).or_default().fetch_count += 1;
        }
        match query.call().await {
            Ok(value) => break Ok(Rc::new(value) as ErasedData),
            Err(err) if err.is_retryable() && attempt < retry => {
                attempt += 1;
                log::warn!("{} failed ({}), retrying", key, err);
            }
            Err(err) => break Err(err),
        }
    };
    if let Some(state) = state.upgrade() {
        settle(&state, &key, &result);
    }
    result
}

fn settle(state: &Rc<RefCell<ClientState>>, key: &QueryKey, result: &Result<ErasedData, ApiError>) {
    let (listeners, invalidated) = {
        let mut state = state.borrow_mut();
        let now = state.clock.now_ms();
        let entry = state.entries.entry(key.clone()).or_default();
        match result {
            Ok(data) => {
                entry.data = Some(data.clone());
                entry.error = None;
                entry.updated_at = Some(now);
            }
            Err(err) => {
                log::error!("{} failed: {}", key, err);
                entry.error = Some(err.clone());
            }
        }
        entry.in_flight = None;
        entry.last_active = now;
        entry.invalidated = std::mem::take(&mut entry.refetch_after_flight);
        let invalidated = entry.invalidated;
        (state.listeners_for(key), invalidated)
    };
    notify(&listeners, QueryEvent::Updated);
    if invalidated {
        notify(&listeners, QueryEvent::Invalidated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::ManualClock;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use std::cell::Cell;

    fn client(clock: &Rc<ManualClock>) -> QueryClient {
        QueryClient::with_clock(clock.clone())
    }

    fn kpis_key(period: &str) -> QueryKey {
        QueryKey::new("dashboard-kpis").param("period", period)
    }

    /// Query answering `value` immediately, counting its calls.
    fn counting(key: QueryKey, value: u32) -> (Query<u32>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let query = Query::new(key, move || {
            counter.set(counter.get() + 1);
            async move { Ok::<_, ApiError>(value) }
        });
        (query, calls)
    }

    /// Query whose single request settles when the returned sender fires.
    fn deferred(key: QueryKey) -> (Query<u32>, oneshot::Sender<u32>) {
        let (tx, rx) = oneshot::channel::<u32>();
        let pending = Rc::new(RefCell::new(Some(rx)));
        let query = Query::new(key, move || {
            let rx = pending.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.map_err(|_| ApiError::Network("cancelled".into())),
                    None => Ok(0),
                }
            }
        });
        (query, tx)
    }

    fn failing(key: QueryKey, error: ApiError) -> Query<u32> {
        Query::new(key, move || {
            let error = error.clone();
            async move { Err::<u32, _>(error) }
        })
    }

    #[test]
    fn test_concurrent_fetches_share_one_request() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let key = kpis_key("30d");

        let (tx, rx) = oneshot::channel::<u32>();
        let pending = Rc::new(RefCell::new(Some(rx)));
        let query = Query::new(key.clone(), move || {
            let rx = pending.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.map_err(|_| ApiError::Network("cancelled".into())),
                    None => Ok(0),
                }
            }
        });

        let options = QueryOptions::default();
        let first = client.fetch(&query, &options);
        let second = client.fetch(&query, &options);
        assert!(client.is_fetching(&key));
        assert!(!client.needs_fetch(&key, &options));

        tx.send(42).unwrap();
        let mut pool = LocalPool::new();
        let (a, b) = pool.run_until(future::join(first, second));

        assert_eq!(a, Ok(42));
        assert_eq!(b, Ok(42));
        assert_eq!(client.fetch_count(&key), 1);
        assert!(!client.is_fetching(&key));
    }

    #[test]
    fn test_fresh_data_is_served_from_cache() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let (query, calls) = counting(kpis_key("30d"), 7);
        let options = QueryOptions::default();

        assert_eq!(block_on(client.fetch(&query, &options)), Ok(7));
        clock.advance(59_999.0);
        assert_eq!(block_on(client.fetch(&query, &options)), Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_stale_data_is_refetched_after_a_minute() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let (query, calls) = counting(kpis_key("30d"), 7);
        let options = QueryOptions::default();

        block_on(client.fetch(&query, &options)).unwrap();
        clock.advance(60_000.0);
        assert!(!client.is_fresh(query.key(), &options));
        assert!(client.needs_fetch(query.key(), &options));

        block_on(client.fetch(&query, &options)).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_period_change_uses_a_separate_entry() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let options = QueryOptions::default();
        let (month, _) = counting(kpis_key("30d"), 30);
        let (week, week_calls) = counting(kpis_key("7d"), 7);

        block_on(client.fetch(&month, &options)).unwrap();
        assert!(client.needs_fetch(week.key(), &options));
        assert_eq!(block_on(client.fetch(&week, &options)), Ok(7));
        assert_eq!(week_calls.get(), 1);
        assert_eq!(client.peek::<u32>(month.key()), Some(30));
    }

    #[test]
    fn test_invalidate_notifies_subscribers() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let (query, _) = counting(kpis_key("30d"), 1);
        let options = QueryOptions::default();

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let subscription = client.subscribe(query.key().clone(), move |event| sink.borrow_mut().push(*event));
        assert_eq!(client.observer_count(query.key()), 1);

        block_on(client.fetch(&query, &options)).unwrap();
        assert!(client.is_fresh(query.key(), &options));

        client.invalidate_scope("dashboard-kpis");
        assert!(!client.is_fresh(query.key(), &options));
        assert_eq!(*events.borrow(), vec![QueryEvent::Updated, QueryEvent::Invalidated]);

        drop(subscription);
        assert_eq!(client.observer_count(query.key()), 0);
    }

    #[test]
    fn test_invalidation_during_flight_is_reported_after_settle() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let key = kpis_key("30d");
        let (tx, rx) = oneshot::channel::<u32>();
        let pending = Rc::new(RefCell::new(Some(rx)));
        let query = Query::new(key.clone(), move || {
            let rx = pending.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.map_err(|_| ApiError::Network("cancelled".into())),
                    None => Ok(0),
                }
            }
        });

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let _subscription = client.subscribe(key.clone(), move |event| sink.borrow_mut().push(*event));

        let options = QueryOptions::default();
        let request = client.fetch(&query, &options);
        client.invalidate_all();
        assert!(events.borrow().is_empty());

        tx.send(5).unwrap();
        LocalPool::new().run_until(request).unwrap();
        assert_eq!(*events.borrow(), vec![QueryEvent::Updated, QueryEvent::Invalidated]);
        assert!(client.needs_fetch(&key, &options));
    }

    #[test]
    fn test_retryable_error_is_retried_once() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let query = failing(kpis_key("30d"), ApiError::Http { status: 503, message: "Service Unavailable".into() });
        let options = QueryOptions::default();

        let result = block_on(client.fetch(&query, &options));
        assert!(matches!(result, Err(ApiError::Http { status: 503, .. })));
        assert_eq!(client.fetch_count(query.key()), 2);

        let snapshot = client.snapshot::<u32>(query.key(), &options);
        assert!(snapshot.error.is_some());
        assert!(snapshot.data.is_none());
        assert!(snapshot.is_stale);
    }

    #[test]
    fn test_decode_error_is_not_retried() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let query = failing(kpis_key("30d"), ApiError::Decode("missing field".into()));

        let result = block_on(client.fetch(&query, &QueryOptions::default()));
        assert!(matches!(result, Err(ApiError::Decode(_))));
        assert_eq!(client.fetch_count(query.key()), 1);
    }

    #[test]
    fn test_error_keeps_previous_data() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let key = kpis_key("30d");
        let options = QueryOptions::default().with_retry(0);
        let (ok, _) = counting(key.clone(), 9);
        block_on(client.fetch(&ok, &options)).unwrap();

        let broken = failing(key.clone(), ApiError::Network("offline".into()));
        assert!(block_on(client.refetch(&broken, &options)).is_err());

        let snapshot = client.snapshot::<u32>(&key, &options);
        assert_eq!(snapshot.data, Some(9));
        assert_eq!(snapshot.error, Some(ApiError::Network("offline".into())));
    }

    #[test]
    fn test_alerts_poll_is_due_every_minute() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let (alerts, _) = counting(QueryKey::new("alerts"), 3);
        let options = QueryOptions::alerts();
        let interval = QueryOptions::ALERTS_REFETCH_MS;

        assert!(client.is_poll_due(alerts.key(), interval));
        block_on(client.fetch(&alerts, &options)).unwrap();
        clock.advance(30_000.0);
        assert!(!client.is_poll_due(alerts.key(), interval));
        clock.advance(30_000.0);
        assert!(client.is_poll_due(alerts.key(), interval));
    }

    #[test]
    fn test_wrong_type_is_not_returned() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let (query, _) = counting(kpis_key("30d"), 1);
        block_on(client.fetch(&query, &QueryOptions::default())).unwrap();
        assert_eq!(client.peek::<String>(query.key()), None);
    }

    #[test]
    fn test_channels_render_before_kpis() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let options = QueryOptions::default();
        let (kpis, kpis_tx) = deferred(kpis_key("30d"));
        let (channels, channels_tx) = deferred(QueryKey::new("dashboard-top-channels").param("period", "30d"));

        let kpis_request = client.fetch(&kpis, &options);
        let channels_request = client.fetch(&channels, &options);

        let mut pool = LocalPool::new();
        channels_tx.send(2).unwrap();
        assert_eq!(pool.run_until(channels_request), Ok(2));

        assert_eq!(client.peek::<u32>(channels.key()), Some(2));
        let pending = client.snapshot::<u32>(kpis.key(), &options);
        assert_eq!(pending.data, None);
        assert!(pending.is_fetching);

        kpis_tx.send(9).unwrap();
        assert_eq!(pool.run_until(kpis_request), Ok(9));
        let settled = client.snapshot::<u32>(kpis.key(), &options);
        assert_eq!(settled.data, Some(9));
        assert!(!settled.is_fetching);
    }

    #[test]
    fn test_idle_entries_are_evicted_after_gc_time() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let (query, _) = counting(QueryKey::new("customers-list").param("search", "maria"), 1);

        let subscription = client.subscribe(query.key().clone(), |_| {});
        block_on(client.fetch(&query, &QueryOptions::default())).unwrap();
        clock.advance(600_000.0);
        drop(subscription);

        clock.advance(DEFAULT_GC_TIME_MS - 1.0);
        client.collect_garbage();
        assert_eq!(client.peek::<u32>(query.key()), Some(1));

        clock.advance(1.0);
        client.collect_garbage();
        assert_eq!(client.peek::<u32>(query.key()), None);
        assert_eq!(client.entry_count(), 0);
    }

    #[test]
    fn test_observed_entries_survive_gc() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let (query, _) = counting(kpis_key("30d"), 3);

        let _subscription = client.subscribe(query.key().clone(), |_| {});
        block_on(client.fetch(&query, &QueryOptions::default())).unwrap();
        clock.advance(24.0 * 3_600_000.0);
        client.collect_garbage();
        assert_eq!(client.peek::<u32>(query.key()), Some(3));
    }

    #[test]
    fn test_search_terms_do_not_accumulate() {
        let clock = Rc::new(ManualClock::new());
        let client = client(&clock);
        let options = QueryOptions::default();

        for n in 0..50 {
            let (query, _) = counting(QueryKey::new("customers-list").param("search", format!("termo{}", n)), n);
            let subscription = client.subscribe(query.key().clone(), |_| {});
            block_on(client.fetch(&query, &options)).unwrap();
            drop(subscription);
        }
        assert_eq!(client.entry_count(), 50);

        clock.advance(24.0 * 3_600_000.0);
        let (current, _) = counting(QueryKey::new("customers-list").param("search", "atual"), 1);
        let _subscription = client.subscribe(current.key().clone(), |_| {});
        assert_eq!(client.entry_count(), 0);

        block_on(client.fetch(&current, &options)).unwrap();
        assert_eq!(client.entry_count(), 1);
    }
}
