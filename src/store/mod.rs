//! Authoritative store for a collection view's UI-visible state.
//!
//! State machine: `Idle → Loading → {Success, Error}`, with `Loading`
//! re-enterable from either outcome on any new [`request`] call. The store
//! is long-lived; there is no terminal state.
//!
//! Requests may overlap when filters change faster than responses arrive.
//! Each fetch is tagged with a monotonically increasing sequence number and
//! only the outcome of the most recently issued request is committed;
//! anything older is discarded without touching state
//! (last-issued-request-wins, not first-completed). In-flight transport
//! work is not aborted — discarding the result is what correctness
//! depends on.
//!
//! [`request`]: ViewModelStore::request

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::api::{Fetch, PageResult};
use crate::query::{CollectionQuery, FilterSet};

/// Point-in-time copy of the store's UI-visible state.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot<T> {
    /// A fetch for the latest request is still in flight.
    pub loading: bool,
    /// Message from the most recent failed fetch, cleared on success.
    pub error: Option<String>,
    /// Latest committed page. Retained unchanged across failures, so the
    /// UI keeps showing stale-but-valid data next to the error notice.
    pub result: Option<PageResult<T>>,
}

struct Inner<T> {
    loading: bool,
    error: Option<String>,
    result: Option<PageResult<T>>,
    last_page: u32,
    last_filters: FilterSet,
}

impl<T> Default for Inner<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            result: None,
            last_page: 1,
            last_filters: FilterSet::new(),
        }
    }
}

struct Shared<F: Fetch> {
    fetcher: F,
    query: CollectionQuery,
    seq: AtomicU64,
    inner: Mutex<Inner<F::Item>>,
}

/// The single mutable owner of a collection view's displayed state.
///
/// Cheap to clone; clones share state, so a mutation path can hold a clone
/// just to call [`invalidate`](Self::invalidate) after a successful write.
pub struct ViewModelStore<F: Fetch> {
    shared: Arc<Shared<F>>,
}

impl<F: Fetch> Clone for ViewModelStore<F> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<F: Fetch> ViewModelStore<F> {
    pub fn new(fetcher: F, query: CollectionQuery) -> Self {
        Self {
            shared: Arc::new(Shared {
                fetcher,
                query,
                seq: AtomicU64::new(0),
                inner: Mutex::new(Inner::default()),
            }),
        }
    }

    /// Fetch a page and commit it if no newer request supersedes it.
    ///
    /// Always re-fetches, even when `page` and `filters` match the previous
    /// call; callers that want to skip no-op changes can compare
    /// [`PageRequest`](crate::query::PageRequest) descriptors themselves.
    pub async fn request(&self, page: u32, filters: FilterSet) {
        let request = self.shared.query.build(page, filters.clone());
        // Ticket and last-request bookkeeping under one lock acquisition,
        // so `last_page`/`last_filters` always belong to the newest ticket.
        let seq = {
            let mut inner = self.shared.inner.lock();
            let seq = self.shared.seq.fetch_add(1, Ordering::SeqCst) + 1;
            inner.loading = true;
            inner.last_page = page;
            inner.last_filters = filters;
            seq
        };
        debug!(seq, query = %request.query_string(), "issuing collection request");

        let outcome = self.shared.fetcher.execute(&request).await;

        let mut inner = self.shared.inner.lock();
        if seq != self.shared.seq.load(Ordering::SeqCst) {
            // A newer request was issued while this one was in flight.
            debug!(seq, "discarding stale response");
            return;
        }

        match outcome {
            Ok(result) => {
                inner.result = Some(result);
                inner.error = None;
            }
            Err(err) => {
                warn!(seq, kind = err.kind(), "collection request failed: {err}");
                inner.error = Some(err.user_message());
            }
        }
        inner.loading = false;
    }

    /// Re-issue the last request with its page and filters unchanged.
    ///
    /// Called after create/update/delete mutations so the list reflects
    /// them. Before any [`request`](Self::request) this fetches page 1,
    /// unfiltered.
    pub async fn invalidate(&self) {
        let (page, filters) = {
            let inner = self.shared.inner.lock();
            (inner.last_page, inner.last_filters.clone())
        };
        self.request(page, filters).await;
    }

    pub fn is_loading(&self) -> bool {
        self.shared.inner.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.shared.inner.lock().error.clone()
    }

    /// Copy out the current UI-visible state.
    pub fn snapshot(&self) -> CollectionSnapshot<F::Item>
    where
        F::Item: Clone,
    {
        let inner = self.shared.inner.lock();
        CollectionSnapshot {
            loading: inner.loading,
            error: inner.error.clone(),
            result: inner.result.clone(),
        }
    }
}
