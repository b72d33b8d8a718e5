use super::client::{QueryClient, QueryEvent, QuerySubscription};
use super::observer::ObserverGuard;
use super::{Query, QueryOptions};
use crate::shared::api_utils::ApiError;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
struct QueryClientContext(StoredValue<QueryClient, LocalStorage>);

/// Make `client` available to every [`use_query`] below the current owner.
pub fn provide_query_client(client: QueryClient) -> QueryClient {
    provide_context(QueryClientContext(StoredValue::new_local(client.clone())));
    client
}

pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClientContext>().0.get_value()
}

/// Per-component observer of one query at a time.
struct QueryRunner<T: Send + Sync + 'static> {
    client: QueryClient,
    options: QueryOptions,
    guard: ObserverGuard,
    current: RefCell<Option<Query<T>>>,
    subscription: RefCell<Option<QuerySubscription>>,
    // Dropping the interval cancels it.
    _poller: RefCell<Option<Interval>>,
    data: RwSignal<Option<T>>,
    error: RwSignal<Option<ApiError>>,
    fetching: RwSignal<bool>,
}

impl<T: Clone + Send + Sync + 'static> QueryRunner<T> {
    fn current(&self) -> Option<Query<T>> {
        self.current.borrow().clone()
    }

    fn switch_to(&self, query: Query<T>, handle: StoredValue<QueryRunner<T>, LocalStorage>) {
        let unchanged = self
            .current
            .borrow()
            .as_ref()
            .is_some_and(|current| current.key() == query.key());
        if unchanged {
            return;
        }

        let ticket = self.guard.advance();
        let guard = self.guard.clone();
        let subscription = self.client.subscribe(query.key().clone(), move |event| {
            if !guard.accepts(ticket) {
                return;
            }
            handle.try_with_value(|runner| runner.on_event(*event));
        });
        // Replacing the old handle unsubscribes from the previous key.
        *self.subscription.borrow_mut() = Some(subscription);
        *self.current.borrow_mut() = Some(query);

        self.sync();
        self.run(false);
    }

    fn sync(&self) {
        let Some(query) = self.current() else {
            return;
        };
        let snapshot = self.client.snapshot::<T>(query.key(), &self.options);
        self.data.try_set(snapshot.data);
        self.error.try_set(snapshot.error);
        self.fetching.try_set(snapshot.is_fetching);
    }

    fn on_event(&self, event: QueryEvent) {
        match event {
            QueryEvent::Updated => self.sync(),
            QueryEvent::Invalidated => {
                self.sync();
                self.run(false);
            }
        }
    }

    fn run(&self, force: bool) {
        let Some(query) = self.current() else {
            return;
        };
        if !force && !self.client.needs_fetch(query.key(), &self.options) {
            return;
        }
        let pending = if force {
            self.client.refetch(&query, &self.options)
        } else {
            self.client.fetch(&query, &self.options)
        };
        self.fetching.try_set(self.client.is_fetching(query.key()));
        // Results reach the signals through the subscription.
        spawn_local(async move {
            let _ = pending.await;
        });
    }

    fn poll(&self, interval_ms: u32) {
        let Some(query) = self.current() else {
            return;
        };
        if self.client.is_poll_due(query.key(), interval_ms) {
            self.run(true);
        }
    }
}

/// Reactive handle returned by [`use_query`].
pub struct QueryResult<T: Send + Sync + 'static> {
    data: RwSignal<Option<T>>,
    error: RwSignal<Option<ApiError>>,
    fetching: RwSignal<bool>,
    runner: StoredValue<QueryRunner<T>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for QueryResult<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryResult<T> {}

impl<T: Clone + Send + Sync + 'static> QueryResult<T> {
    pub fn data(&self) -> Option<T> {
        self.data.get()
    }

    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.data.with(|data| f(data.as_ref()))
    }

    pub fn error(&self) -> Option<ApiError> {
        self.error.get()
    }

    /// No data yet and no error to show.
    pub fn is_loading(&self) -> bool {
        self.data.with(Option::is_none) && self.error.with(Option::is_none)
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.get()
    }

    /// Request fresh data now, ignoring staleness.
    pub fn refetch(&self) {
        self.runner.try_with_value(|runner| runner.run(true));
    }

    pub fn error_signal(&self) -> Signal<Option<ApiError>> {
        self.error.into()
    }

    /// [`refetch`](Self::refetch) as a callback for retry buttons.
    pub fn retry_callback(&self) -> Callback<()> {
        let query = *self;
        Callback::new(move |_| query.refetch())
    }
}

/// Observe the query produced by `source`, refetching whenever the signals
/// it reads change its key. Late results for a previous key, or for an
/// unmounted component, are dropped.
pub fn use_query<T, S>(source: S, options: QueryOptions) -> QueryResult<T>
where
    T: Clone + Send + Sync + 'static,
    S: Fn() -> Query<T> + 'static,
{
    let guard = ObserverGuard::new();
    let data = RwSignal::new(None);
    let error = RwSignal::new(None);
    let fetching = RwSignal::new(false);
    let runner = StoredValue::new_local(QueryRunner {
        client: use_query_client(),
        options,
        guard: guard.clone(),
        current: RefCell::new(None),
        subscription: RefCell::new(None),
        _poller: RefCell::new(None),
        data,
        error,
        fetching,
    });

    Effect::new(move |_| {
        let query = source();
        runner.with_value(|r| r.switch_to(query, runner));
    });

    if let Some(interval_ms) = options.refetch_interval_ms {
        let poller = Interval::new(interval_ms, move || {
            runner.try_with_value(|r| r.poll(interval_ms));
        });
        runner.with_value(|r| *r._poller.borrow_mut() = Some(poller));
    }

    on_cleanup(move || guard.dispose());

    QueryResult {
        data,
        error,
        fetching,
        runner,
    }
}

/// Loading state of a page: only the queries it cannot render without are
/// passed in, secondary widgets show their own placeholders.
pub struct PageLoad;

impl PageLoad {
    pub fn any_pending(required: &[bool]) -> bool {
        required.iter().any(|loading| *loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_waits_only_for_required_queries() {
        assert!(PageLoad::any_pending(&[false, true]));
        assert!(!PageLoad::any_pending(&[false, false]));
        assert!(!PageLoad::any_pending(&[]));
    }
}
