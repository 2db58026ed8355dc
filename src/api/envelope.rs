//! Wire envelope for the collection API.
//!
//! The server wraps every response in a top-level object carrying a
//! `status` discriminator plus payload. Field names are part of the
//! compatibility contract and must match the wire bit-exactly; historical
//! endpoints disagree on two of them, so both spellings are accepted on
//! decode (`posts`/`articles`, `totalCount`/`totalArticles`). The canonical
//! spellings for new endpoints are `posts` and `totalCount`.

use serde::Deserialize;

use crate::api::error::FetchError;

/// Decoded collection response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default = "Vec::new", alias = "articles")]
    posts: Vec<T>,
    #[serde(default, rename = "totalPages")]
    total_pages: u32,
    #[serde(default, rename = "totalCount", alias = "totalArticles")]
    total_count: u64,
    #[serde(default = "first_page", rename = "currentPage")]
    current_page: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Envelope<T> {
    /// Convert the envelope into a page result, or an application error
    /// when the server reported a non-success status.
    pub(crate) fn into_result(self) -> Result<PageResult<T>, FetchError> {
        if self.status != "success" {
            return Err(FetchError::application(self.message));
        }
        Ok(PageResult {
            items: self.posts,
            current_page: self.current_page.max(1),
            // Some endpoints report 0 pages for an empty collection.
            total_pages: self.total_pages.max(1),
            total_count: self.total_count,
        })
    }
}

/// One successfully fetched page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    /// Always at least 1, even for an empty collection.
    pub total_pages: u32,
    pub total_count: u64,
}

/// Acknowledgement envelope returned by mutation endpoints.
///
/// Mutations answer either `{status, message?}` or `{error}` depending on
/// the endpoint's vintage; both forms are handled.
#[derive(Debug, Deserialize)]
pub(crate) struct AckEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AckEnvelope {
    pub(crate) fn into_result(self) -> Result<(), FetchError> {
        if let Some(error) = self.error {
            return Err(FetchError::application(Some(error)));
        }
        match self.status.as_deref() {
            Some("success") => Ok(()),
            _ => Err(FetchError::application(self.message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Envelope<serde_json::Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn success_envelope_decodes() {
        let envelope = decode(json!({
            "status": "success",
            "posts": [{"_id": "a1", "title": "hello"}],
            "totalPages": 4,
            "totalCount": 38,
            "currentPage": 2
        }));

        let result = envelope.into_result().unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.current_page, 2);
        assert_eq!(result.total_pages, 4);
        assert_eq!(result.total_count, 38);
    }

    #[test]
    fn articles_and_total_articles_spellings_are_accepted() {
        let envelope = decode(json!({
            "status": "success",
            "articles": [{"_id": "a1"}, {"_id": "a2"}],
            "totalPages": 1,
            "totalArticles": 2,
            "currentPage": 1
        }));

        let result = envelope.into_result().unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn empty_collection_with_zero_pages_is_valid() {
        let envelope = decode(json!({
            "status": "success",
            "posts": [],
            "totalPages": 0,
            "currentPage": 1
        }));

        let result = envelope.into_result().unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_count, 0);
    }

    #[test]
    fn error_status_carries_server_message() {
        let envelope = decode(json!({
            "status": "error",
            "message": "Invalid category"
        }));

        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.user_message(), "Invalid category");
    }

    #[test]
    fn error_status_without_message_gets_fallback() {
        let envelope = decode(json!({ "status": "error" }));
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.user_message(), "failed to load");
    }

    #[test]
    fn ack_accepts_both_error_shapes() {
        let ok: AckEnvelope = serde_json::from_value(json!({"status": "success"})).unwrap();
        assert!(ok.into_result().is_ok());

        let legacy: AckEnvelope =
            serde_json::from_value(json!({"error": "not found"})).unwrap();
        let err = legacy.into_result().unwrap_err();
        assert_eq!(err.user_message(), "not found");

        let modern: AckEnvelope =
            serde_json::from_value(json!({"status": "error", "message": "denied"})).unwrap();
        let err = modern.into_result().unwrap_err();
        assert_eq!(err.user_message(), "denied");
    }
}
