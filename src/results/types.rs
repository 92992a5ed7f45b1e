//! Result type definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single text search result
///
/// Backends may attach fields beyond the three documented ones; those are
/// carried in `extra` and serialized back out unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextResult {
    /// Result title
    pub title: String,
    /// Result URL
    pub href: String,
    /// Description snippet
    pub body: String,
    /// Backend-specific extra fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextResult {
    pub fn new(
        title: impl Into<String>,
        href: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            body: body.into(),
            extra: Map::new(),
        }
    }
}

/// A single image search result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageResult {
    pub title: String,
    /// Full-size image URL
    pub image: String,
    /// Thumbnail URL
    pub thumbnail: String,
    /// Page the image was found on
    pub url: String,
    pub height: u32,
    pub width: u32,
    /// Hosting site
    pub source: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single news search result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NewsResult {
    /// Publication date as reported by the backend
    pub date: String,
    pub title: String,
    pub body: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub source: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
