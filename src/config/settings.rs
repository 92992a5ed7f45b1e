//! Settings structures for the search service

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level service settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (DDGS_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("DDGS_SEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("DDGS_SEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("DDGS_SEARCH_UPSTREAM_URL") {
            self.upstream.base_url = val;
        }
        if let Ok(val) = std::env::var("DDGS_SEARCH_UPSTREAM_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.upstream.request_timeout = timeout;
            }
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8001,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Settings for the delegated DDGS service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Base URL of the DDGS service
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: 30.0,
        }
    }
}
