//! Error translation at the HTTP boundary

use crate::provider::ProviderError;
use crate::search::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Error surfaced to HTTP callers.
///
/// Validation problems are rejected before dispatch; everything that goes
/// wrong during delegation collapses into a single 500 response carrying
/// the original failure text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Search failed: {0}")]
    Delegation(#[from] ProviderError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Delegation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        (self.status(), Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
