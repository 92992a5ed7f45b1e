//! Web server module
//!
//! Provides the HTTP API for the search service.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
