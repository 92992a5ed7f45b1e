//! Search result types and post-filtering
//!
//! Results come back from the provider as opaque mappings; this module
//! gives them shape and drops entries from the disallowed source.

mod filter;
mod types;

pub use filter::{filter_images, filter_news, filter_text, is_disallowed, DISALLOWED_SOURCE};
pub use types::{ImageResult, NewsResult, TextResult};
