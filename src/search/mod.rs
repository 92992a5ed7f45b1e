//! Search request model and parameter validation
//!
//! Every bound is enforced here, before anything is dispatched to the
//! search provider. Out-of-range values never reach the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lowest accepted `max_results` value
pub const MIN_RESULTS: u32 = 1;
/// Highest accepted `max_results` value
pub const MAX_RESULTS: u32 = 100;
/// Number of results requested when the caller does not say
pub const DEFAULT_MAX_RESULTS: u32 = 10;
/// Region used when the caller does not pick one
pub const DEFAULT_REGION: &str = "us-en";
/// Backend selector that lets the provider choose
pub const DEFAULT_BACKEND: &str = "auto";

/// A parameter rejected at the request boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Safe search strictness applied by the underlying provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    On,
    #[default]
    Moderate,
    Off,
}

impl SafeSearch {
    /// String representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Moderate => "moderate",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for SafeSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SafeSearch {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "moderate" => Ok(Self::Moderate),
            "off" => Ok(Self::Off),
            other => Err(ValidationError::new(format!(
                "unknown safesearch level '{other}', expected one of: on, moderate, off"
            ))),
        }
    }
}

/// Recency window restricting results to a recent publication period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeLimit {
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "w")]
    Week,
    #[serde(rename = "m")]
    Month,
    #[serde(rename = "y")]
    Year,
}

impl TimeLimit {
    /// Single-letter code used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "m",
            Self::Year => "y",
        }
    }
}

impl fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeLimit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(Self::Day),
            "w" => Ok(Self::Week),
            "m" => Ok(Self::Month),
            "y" => Ok(Self::Year),
            other => Err(ValidationError::new(format!(
                "unknown timelimit '{other}', expected one of: d, w, m, y"
            ))),
        }
    }
}

/// Raw query parameters as they arrive on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub region: Option<String>,
    pub safesearch: Option<String>,
    pub timelimit: Option<String>,
    pub max_results: Option<u32>,
    pub page: Option<u32>,
    pub backend: Option<String>,
}

/// A fully validated search request, ready for dispatch
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// The search query, forwarded verbatim
    pub query: String,
    /// Region code, e.g. "us-en", "uk-en"
    pub region: String,
    /// Safe search level
    pub safesearch: SafeSearch,
    /// Recency filter, absent means unfiltered
    pub timelimit: Option<TimeLimit>,
    /// Maximum number of results
    pub max_results: u32,
    /// Page number (1-indexed)
    pub page: u32,
    /// Backend selector, "auto" delegates the choice
    pub backend: String,
}

impl SearchRequest {
    /// Validate raw parameters into a dispatchable request
    pub fn from_params(params: SearchParams) -> Result<Self, ValidationError> {
        let query = params.query.unwrap_or_default();
        if query.trim().is_empty() {
            return Err(ValidationError::new("query must not be empty"));
        }

        let safesearch = match params.safesearch.as_deref() {
            Some(value) => value.parse()?,
            None => SafeSearch::default(),
        };

        let timelimit = match params.timelimit.as_deref() {
            Some(value) => Some(value.parse::<TimeLimit>()?),
            None => None,
        };

        let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
        if !(MIN_RESULTS..=MAX_RESULTS).contains(&max_results) {
            return Err(ValidationError::new(format!(
                "max_results must be between {MIN_RESULTS} and {MAX_RESULTS}, got {max_results}"
            )));
        }

        let page = params.page.unwrap_or(1);
        if page < 1 {
            return Err(ValidationError::new(format!(
                "page must be 1 or greater, got {page}"
            )));
        }

        Ok(Self {
            query,
            region: params.region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
            safesearch,
            timelimit,
            max_results,
            page,
            backend: params.backend.unwrap_or_else(|| DEFAULT_BACKEND.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> SearchParams {
        SearchParams {
            query: Some(query.to_string()),
            ..SearchParams::default()
        }
    }

    #[test]
    fn test_defaults() {
        let request = SearchRequest::from_params(params("rust lang")).unwrap();
        assert_eq!(request.query, "rust lang");
        assert_eq!(request.region, "us-en");
        assert_eq!(request.safesearch, SafeSearch::Moderate);
        assert_eq!(request.timelimit, None);
        assert_eq!(request.max_results, 10);
        assert_eq!(request.page, 1);
        assert_eq!(request.backend, "auto");
    }

    #[test]
    fn test_missing_query_rejected() {
        assert!(SearchRequest::from_params(SearchParams::default()).is_err());
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(SearchRequest::from_params(params("")).is_err());
        assert!(SearchRequest::from_params(params("   ")).is_err());
    }

    #[test]
    fn test_max_results_bounds() {
        let mut p = params("q");
        p.max_results = Some(0);
        assert!(SearchRequest::from_params(p.clone()).is_err());
        p.max_results = Some(101);
        assert!(SearchRequest::from_params(p.clone()).is_err());
        p.max_results = Some(1);
        assert_eq!(SearchRequest::from_params(p.clone()).unwrap().max_results, 1);
        p.max_results = Some(100);
        assert_eq!(SearchRequest::from_params(p).unwrap().max_results, 100);
    }

    #[test]
    fn test_page_bound() {
        let mut p = params("q");
        p.page = Some(0);
        assert!(SearchRequest::from_params(p.clone()).is_err());
        p.page = Some(3);
        assert_eq!(SearchRequest::from_params(p).unwrap().page, 3);
    }

    #[test]
    fn test_safesearch_parsing() {
        let mut p = params("q");
        p.safesearch = Some("off".to_string());
        assert_eq!(
            SearchRequest::from_params(p.clone()).unwrap().safesearch,
            SafeSearch::Off
        );
        p.safesearch = Some("strict".to_string());
        assert!(SearchRequest::from_params(p).is_err());
    }

    #[test]
    fn test_timelimit_parsing() {
        let mut p = params("q");
        p.timelimit = Some("w".to_string());
        assert_eq!(
            SearchRequest::from_params(p.clone()).unwrap().timelimit,
            Some(TimeLimit::Week)
        );
        p.timelimit = Some("hour".to_string());
        assert!(SearchRequest::from_params(p).is_err());
    }

    #[test]
    fn test_query_forwarded_verbatim() {
        let request = SearchRequest::from_params(params("  padded  ")).unwrap();
        assert_eq!(request.query, "  padded  ");
    }

    #[test]
    fn test_timelimit_codes() {
        assert_eq!(TimeLimit::Day.as_str(), "d");
        assert_eq!(TimeLimit::Year.to_string(), "y");
        assert_eq!("m".parse::<TimeLimit>().unwrap(), TimeLimit::Month);
    }
}
