use std::time::Duration;

use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use crate::config::Config;
use crate::normalize::parse_results;
use crate::types::{Listing, SearchError, SearchOutcome};

pub const RAINFOREST_ENDPOINT: &str = "https://api.rainforestapi.com/request";

/// Maximum number of listings taken from one API response.
pub const MAX_RESULTS: usize = 10;

const USER_AGENT: &str = "rainforest-quick-demo/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Outbound Rainforest API client. Cheap to clone; the inner reqwest
/// client shares its connection pool across clones.
#[derive(Clone)]
pub struct RainforestClient {
    api_key: Option<String>,
    amazon_domain: String,
    http: reqwest::Client,
}

impl RainforestClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            api_key: config.api_key.clone(),
            amazon_domain: config.amazon_domain.clone(),
            http,
        })
    }

    /// Run one search and fold every failure mode into the outcome's
    /// error field. Exactly one outbound call per invocation, or none
    /// when the API key is missing; never retries.
    pub async fn search(&self, query: &str, max_items: usize) -> SearchOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return SearchOutcome::failed(SearchError::MissingApiKey);
        };
        match self.fetch(api_key, query, max_items).await {
            Ok(results) => SearchOutcome::ok(results),
            Err(error) => {
                warn!(query, %error, "rainforest search failed");
                SearchOutcome::failed(error)
            }
        }
    }

    async fn fetch(
        &self,
        api_key: &str,
        query: &str,
        max_items: usize,
    ) -> Result<Vec<Listing>, SearchError> {
        let response = self
            .http
            .get(RAINFOREST_ENDPOINT)
            .query(&[
                ("api_key", api_key),
                ("type", "search"),
                ("amazon_domain", self.amazon_domain.as_str()),
                ("search_term", query),
            ])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UpstreamStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        let body = response.text().await.map_err(classify)?;
        let data: Value = serde_json::from_str(&body)
            .map_err(|e| SearchError::Unexpected(e.to_string()))?;
        Ok(parse_results(&data, max_items))
    }
}

// Transport-level failures are network errors; anything else that
// reqwest reports (body decoding and the like) is unexpected.
fn classify(error: reqwest::Error) -> SearchError {
    if error.is_timeout() || error.is_connect() || error.is_request() {
        SearchError::Network(error.to_string())
    } else {
        SearchError::Unexpected(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> Config {
        Config {
            api_key: api_key.map(str::to_string),
            port: 8000,
            amazon_domain: "amazon.com".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_api_key_short_circuits() {
        let client = RainforestClient::new(&config(None)).unwrap();
        let outcome = client.search("nintendo switch", MAX_RESULTS).await;
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.error, Some(SearchError::MissingApiKey));
    }

    #[test]
    fn missing_key_message_matches_the_banner_text() {
        assert_eq!(
            SearchError::MissingApiKey.to_string(),
            "Missing RAINFOREST_API_KEY environment variable."
        );
    }

    #[test]
    fn upstream_error_names_code_and_reason() {
        let error = SearchError::UpstreamStatus { code: 403, reason: "Forbidden".to_string() };
        assert_eq!(error.to_string(), "HTTP error 403: Forbidden");
    }
}
