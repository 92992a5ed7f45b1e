//! HTTP client for the DDGS metasearch service

use super::{ProviderError, SearchProvider};
use crate::config::UpstreamSettings;
use crate::results::{ImageResult, NewsResult, TextResult};
use crate::search::{SafeSearch, SearchRequest, TimeLimit};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body for the DDGS `/search/*` endpoints
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    query: &'a str,
    region: &'a str,
    safesearch: SafeSearch,
    #[serde(skip_serializing_if = "Option::is_none")]
    timelimit: Option<TimeLimit>,
    max_results: u32,
    page: u32,
    backend: &'a str,
}

impl<'a> From<&'a SearchRequest> for WireRequest<'a> {
    fn from(request: &'a SearchRequest) -> Self {
        Self {
            query: &request.query,
            region: &request.region,
            safesearch: request.safesearch,
            timelimit: request.timelimit,
            max_results: request.max_results,
            page: request.page,
            backend: &request.backend,
        }
    }
}

/// Response envelope returned by the DDGS service
#[derive(Debug, Deserialize)]
struct WireResponse<T> {
    results: Vec<T>,
}

/// HTTP binding of [`SearchProvider`] talking to a DDGS service instance
#[derive(Clone)]
pub struct DdgsClient {
    client: Client,
    base_url: String,
}

impl DdgsClient {
    /// Create a client for the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let settings = UpstreamSettings {
            base_url: base_url.into(),
            ..UpstreamSettings::default()
        };
        Self::with_settings(&settings)
    }

    /// Create a client from upstream settings
    pub fn with_settings(settings: &UpstreamSettings) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client delegates to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        vertical: &str,
        request: &SearchRequest,
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{}/search/{}", self.base_url, vertical);

        let response = self
            .client
            .post(&url)
            .json(&WireRequest::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(format!(
                "search provider returned HTTP {}",
                status.as_u16()
            )));
        }

        let envelope: WireResponse<T> = response.json().await?;
        Ok(envelope.results)
    }
}

#[async_trait]
impl SearchProvider for DdgsClient {
    async fn text(&self, request: &SearchRequest) -> Result<Vec<TextResult>, ProviderError> {
        self.dispatch("text", request).await
    }

    async fn images(&self, request: &SearchRequest) -> Result<Vec<ImageResult>, ProviderError> {
        self.dispatch("images", request).await
    }

    async fn news(&self, request: &SearchRequest) -> Result<Vec<NewsResult>, ProviderError> {
        self.dispatch("news", request).await
    }
}
