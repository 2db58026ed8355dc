//! HTTP client layer for the collection API.
//!
//! [`FetchExecutor`] performs reads against the collection endpoint,
//! [`MutationClient`] performs writes, and both classify failures into the
//! [`FetchError`] taxonomy. The [`Fetch`] trait is the seam between the
//! network and the view-model store, so the store can be driven by a
//! deterministic fake in tests.

mod envelope;
mod error;
mod executor;
mod mutate;

pub use envelope::PageResult;
pub use error::FetchError;
pub use executor::FetchExecutor;
pub use mutate::MutationClient;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::query::PageRequest;

/// Contract for fetching one page of a collection.
#[async_trait]
pub trait Fetch: Send + Sync {
    type Item: Send;

    /// Perform the fetch for `request`.
    ///
    /// Exactly one attempt; retry policy belongs to the caller.
    async fn execute(&self, request: &PageRequest) -> Result<PageResult<Self::Item>, FetchError>;
}

/// Build the shared HTTP client with the configured timeouts.
pub(crate) fn build_client(config: &ApiConfig) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .build()
        .expect("failed to build http client")
}
