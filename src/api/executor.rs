use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::envelope::{Envelope, PageResult};
use crate::api::error::FetchError;
use crate::api::{build_client, Fetch};
use crate::config::ApiConfig;
use crate::models::Post;
use crate::query::PageRequest;

/// Performs the network call for a [`PageRequest`].
///
/// One outbound GET per [`execute`](Self::execute) call; no retries, no
/// caching. The base URL is injected through [`ApiConfig`] so the executor
/// can be pointed at a test endpoint.
pub struct FetchExecutor<T = Post> {
    client: Client,
    collection_url: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FetchExecutor<T> {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(build_client(config), config)
    }

    /// Construct with a caller-provided client (shared connection pool).
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            collection_url: config.collection_url(),
            _marker: PhantomData,
        }
    }

    /// The fixed collection endpoint this executor fetches from.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }
}

#[async_trait]
impl<T> Fetch for FetchExecutor<T>
where
    T: DeserializeOwned + Send + Sync,
{
    type Item = T;

    async fn execute(&self, request: &PageRequest) -> Result<PageResult<T>, FetchError> {
        let url = format!("{}?{}", self.collection_url, request.query_string());
        debug!(%url, "fetching collection page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                status: e.status().map(|s| s.as_u16()),
                source: Some(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: Some(status.as_u16()),
                source: None,
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            status: Some(status.as_u16()),
            source: Some(e),
        })?;

        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode { source: e })?;
        envelope.into_result()
    }
}
