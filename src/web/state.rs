//! Application state shared across handlers

use crate::config::Settings;
use crate::provider::SearchProvider;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Delegated search provider
    pub provider: Arc<dyn SearchProvider>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            settings: Arc::new(settings),
            provider,
        }
    }
}
