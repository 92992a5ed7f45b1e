//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::results::{self, ImageResult, NewsResult, TextResult};
use crate::search::{SearchParams, SearchRequest};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info};

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "ddgs-search"
    }))
}

/// Text search handler
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<TextResult>>, ApiError> {
    let request = SearchRequest::from_params(params)?;

    info!(
        "Search request: query='{}', region={}, backend={}, page={}",
        request.query, request.region, request.backend, request.page
    );

    let results = match state.provider.text(&request).await {
        Ok(results) => results,
        Err(e) => {
            error!("Search error: {}", e);
            return Err(e.into());
        }
    };

    let found = results.len();
    let filtered = results::filter_text(results);
    info!(
        "Search completed: found {} results ({} after filtering)",
        found,
        filtered.len()
    );

    Ok(Json(filtered))
}

/// Image search handler
pub async fn search_images(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ImageResult>>, ApiError> {
    let request = SearchRequest::from_params(params)?;

    info!(
        "Image search request: query='{}', region={}, backend={}, page={}",
        request.query, request.region, request.backend, request.page
    );

    let results = match state.provider.images(&request).await {
        Ok(results) => results,
        Err(e) => {
            error!("Image search error: {}", e);
            return Err(e.into());
        }
    };

    let found = results.len();
    let filtered = results::filter_images(results);
    info!(
        "Image search completed: found {} results ({} after filtering)",
        found,
        filtered.len()
    );

    Ok(Json(filtered))
}

/// News search handler
pub async fn search_news(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<NewsResult>>, ApiError> {
    let request = SearchRequest::from_params(params)?;

    info!(
        "News search request: query='{}', region={}, backend={}, page={}",
        request.query, request.region, request.backend, request.page
    );

    let results = match state.provider.news(&request).await {
        Ok(results) => results,
        Err(e) => {
            error!("News search error: {}", e);
            return Err(e.into());
        }
    };

    let found = results.len();
    let filtered = results::filter_news(results);
    info!(
        "News search completed: found {} results ({} after filtering)",
        found,
        filtered.len()
    );

    Ok(Json(filtered))
}
