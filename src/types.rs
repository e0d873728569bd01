use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One product card as shown on the results page. Built once from a raw
/// API item and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub asin: String,
    pub link: String,
    pub image: String,
    pub price: String,
    pub rating: Option<f64>,
    pub ratings_total: Option<i64>,
}

/// Why a search produced no listings. The Display strings are shown
/// verbatim in the page's error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Missing RAINFOREST_API_KEY environment variable.")]
    MissingApiKey,
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {code}: {reason}")]
    UpstreamStatus { code: u16, reason: String },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Result of one fetch: either listings with no error, or an empty list
/// with the error that stopped it.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<Listing>,
    pub error: Option<SearchError>,
}

impl SearchOutcome {
    pub fn ok(results: Vec<Listing>) -> Self {
        Self { results, error: None }
    }

    pub fn failed(error: SearchError) -> Self {
        Self { results: Vec::new(), error: Some(error) }
    }
}
