//! Search provider abstraction
//!
//! The actual metasearch work, querying backends, pagination, and result
//! aggregation, lives in an external DDGS service. This module defines the
//! seam the rest of the crate talks to; [`DdgsClient`] is the HTTP binding.

mod ddgs;

pub use ddgs::DdgsClient;

use crate::results::{ImageResult, NewsResult, TextResult};
use crate::search::SearchRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Failure raised while delegating a search.
///
/// A single collapsed kind: network trouble, provider-side errors, and
/// undecodable responses all end up here, carrying only the failure text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Interface to the delegated metasearch capability
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Text (web page) search
    async fn text(&self, request: &SearchRequest) -> Result<Vec<TextResult>, ProviderError>;

    /// Image search
    async fn images(&self, request: &SearchRequest) -> Result<Vec<ImageResult>, ProviderError>;

    /// News search
    async fn news(&self, request: &SearchRequest) -> Result<Vec<NewsResult>, ProviderError>;
}
