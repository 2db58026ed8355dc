//! Item models for the admin panel's collections.

use serde::{Deserialize, Serialize};

/// A post/article record as stored by the content API.
///
/// Only the fields the admin panel actually reads are typed; everything
/// else the server sends rides along in `extra` so round-tripping a post
/// through an update never drops data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Stable unique identifier; list key and mutation-endpoint path segment.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
