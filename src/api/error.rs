//! Error types for collection fetches and mutations.
//!
//! Every failure is recoverable: callers surface it and retry on the next
//! user action. Nothing in this taxonomy is fatal.

use thiserror::Error;

/// Generic notice shown when the server gave us nothing better.
const GENERIC_FAILURE: &str = "failed to load";

fn transport_message(status: &Option<u16>) -> String {
    match status {
        Some(status) => format!("transport failure (http {status})"),
        None => "transport failure".to_string(),
    }
}

/// Errors that can occur while talking to the collection API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable or a non-2xx HTTP status.
    #[error("{}", transport_message(.status))]
    Transport {
        status: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Response body was not the expected JSON envelope.
    #[error("malformed response body")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed envelope whose `status` field was not `"success"`.
    #[error("server rejected request: {message}")]
    Application { message: String },
}

impl FetchError {
    /// Error kind string for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Decode { .. } => "decode",
            FetchError::Application { .. } => "application",
        }
    }

    /// Human-readable message for display next to the (retained) prior data.
    ///
    /// Transport and decode failures collapse to a generic notice; an
    /// application error surfaces the server-provided message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { .. } | FetchError::Decode { .. } => {
                GENERIC_FAILURE.to_string()
            }
            FetchError::Application { message } => message.clone(),
        }
    }

    /// Build an application error, falling back to the generic notice when
    /// the server omitted its `message` field.
    pub(crate) fn application(message: Option<String>) -> Self {
        FetchError::Application {
            message: message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_decode_collapse_to_generic_notice() {
        let err = FetchError::Transport {
            status: Some(502),
            source: None,
        };
        assert_eq!(err.user_message(), "failed to load");
        assert_eq!(err.kind(), "transport");

        let bad_json = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::Decode { source: bad_json };
        assert_eq!(err.user_message(), "failed to load");
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn application_error_surfaces_server_message() {
        let err = FetchError::application(Some("Invalid category".to_string()));
        assert_eq!(err.user_message(), "Invalid category");
        assert_eq!(err.kind(), "application");
    }

    #[test]
    fn application_error_without_message_falls_back() {
        let err = FetchError::application(None);
        assert_eq!(err.user_message(), "failed to load");
    }

    #[test]
    fn transport_display_includes_status_when_known() {
        let err = FetchError::Transport {
            status: Some(404),
            source: None,
        };
        assert_eq!(err.to_string(), "transport failure (http 404)");

        let err = FetchError::Transport {
            status: None,
            source: None,
        };
        assert_eq!(err.to_string(), "transport failure");
    }
}
