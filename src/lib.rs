//! DDGS-Search: an HTTP facade over a DDGS metasearch backend
//!
//! Exposes a small search API (text, images, news) and a health probe.
//! All actual search work is delegated to an external DDGS service; this
//! crate validates parameters, forwards the call, filters disallowed
//! sources out of the results, and translates failures into HTTP errors.

pub mod config;
pub mod provider;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use provider::{DdgsClient, SearchProvider};
pub use results::{ImageResult, NewsResult, TextResult};
pub use search::SearchRequest;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
