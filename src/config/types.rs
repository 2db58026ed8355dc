use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Settings for the content API the panel talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://api.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the collection endpoint under the base URL.
    #[serde(default = "default_collection_path")]
    pub collection_path: String,
    /// Items per page for collection fetches (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_collection_path() -> String {
    "posts".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection_path: default_collection_path(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full URL of the collection endpoint.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url(),
            self.collection_path.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_normalizes_slashes() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            collection_path: "/api/articles/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(
            config.collection_url(),
            "https://api.example.com/api/articles"
        );
    }
}
