use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use crate::api::envelope::AckEnvelope;
use crate::api::error::FetchError;
use crate::api::build_client;
use crate::config::ApiConfig;

/// Client for the post mutation endpoints.
///
/// Create, update, delete and notify all answer with the ack envelope; the
/// caller's only follow-up obligation after a successful mutation is to
/// invalidate its collection view so the list refetches.
pub struct MutationClient {
    client: Client,
    base_url: String,
}

impl MutationClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(build_client(config), config)
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    /// `POST {base}/post`
    pub async fn create_post<B: Serialize + Sync>(&self, body: &B) -> Result<(), FetchError> {
        let url = format!("{}/post", self.base_url);
        self.send(self.client.request(Method::POST, &url).json(body), &url)
            .await
    }

    /// `PUT {base}/post/{id}`
    pub async fn update_post<B: Serialize + Sync>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<(), FetchError> {
        let url = format!("{}/post/{}", self.base_url, id);
        self.send(self.client.request(Method::PUT, &url).json(body), &url)
            .await
    }

    /// `DELETE {base}/post/{id}`
    pub async fn delete_post(&self, id: &str) -> Result<(), FetchError> {
        let url = format!("{}/post/{}", self.base_url, id);
        self.send(self.client.request(Method::DELETE, &url), &url)
            .await
    }

    /// `POST {base}/admin/notify/post/{id}` — push notification fan-out.
    pub async fn notify_post(&self, id: &str) -> Result<(), FetchError> {
        let url = format!("{}/admin/notify/post/{}", self.base_url, id);
        self.send(self.client.request(Method::POST, &url), &url)
            .await
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<(), FetchError> {
        debug!(%url, "issuing mutation");

        let response = request.send().await.map_err(|e| FetchError::Transport {
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

        let ack: AckEnvelope =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode { source: e })?;
        ack.into_result()
    }
}
