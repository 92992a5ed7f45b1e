//! Disallowed-source filtering
//!
//! Results whose URL points at the disallowed source are dropped before the
//! response is returned. The check is a case-insensitive substring match;
//! entries without a URL are kept. Order is preserved and retained entries
//! are not modified.

use super::types::{ImageResult, NewsResult, TextResult};

/// Substring identifying the content source that is never returned to callers
pub const DISALLOWED_SOURCE: &str = "grokipedia";

/// Check whether a result URL points at the disallowed source
pub fn is_disallowed(url: &str) -> bool {
    url.to_lowercase().contains(DISALLOWED_SOURCE)
}

/// Drop text results pointing at the disallowed source
pub fn filter_text(results: Vec<TextResult>) -> Vec<TextResult> {
    results
        .into_iter()
        .filter(|r| !is_disallowed(&r.href))
        .collect()
}

/// Drop image results pointing at the disallowed source
pub fn filter_images(results: Vec<ImageResult>) -> Vec<ImageResult> {
    results
        .into_iter()
        .filter(|r| !is_disallowed(&r.url))
        .collect()
}

/// Drop news results pointing at the disallowed source
pub fn filter_news(results: Vec<NewsResult>) -> Vec<NewsResult> {
    results
        .into_iter()
        .filter(|r| !is_disallowed(&r.url))
        .collect()
}
