//! HTTP client for the `ScanSan` REST API.
//!
//! Every endpoint method issues a single GET and returns the decoded JSON
//! body, or `None` when the request could not be made, the upstream answered
//! with a non-2xx status, or the body was not JSON. Failures are logged here
//! and never propagated: callers treat `None` as an ordinary outcome.
//! There are no retries and no caching.

use std::time::Duration;

use propscan_core::{AppConfig, SearchQuery, DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ScansanError;

const AUTH_HEADER: &str = "X-Auth-Token";

/// Client for the `ScanSan` REST API.
///
/// Holds the HTTP client, the static credential and the base URL. Use
/// [`ScansanClient::from_config`] in production or
/// [`ScansanClient::with_base_url`] to point at a mock server in tests.
pub struct ScansanClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl ScansanClient {
    /// Creates a client pointed at the production `ScanSan` API.
    ///
    /// # Errors
    ///
    /// Returns [`ScansanError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, ScansanError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_API_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScansanError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScansanError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ScansanError> {
        Self::build(api_key, timeout_secs, base_url, DEFAULT_USER_AGENT)
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ScansanClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScansanError> {
        Self::build(
            &config.scansan_api_key,
            config.request_timeout_secs,
            &config.api_base_url,
            &config.user_agent,
        )
    }

    fn build(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, ScansanError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so endpoint segments are appended under
        // the versioned prefix instead of replacing it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ScansanError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ScansanError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Searches for area codes by area name, or by postcode district and
    /// street (`area_codes/search`).
    pub async fn search(&self, query: &SearchQuery) -> Option<Value> {
        let params = query.query_params();
        if let Some(&(field, _)) = params.iter().find(|(_, v)| v.trim().is_empty()) {
            Self::log_failure(
                "search",
                &ScansanError::MissingIdentifier {
                    endpoint: "search",
                    field,
                },
            );
            return None;
        }
        let url = self.build_url(&["area_codes", "search"], &params);
        self.fetch("search", &url).await
    }

    /// Fetches the summary for an area code (`area_codes/{code}/summary`).
    pub async fn summary(&self, area_code: &str, area_code_district: Option<&str>) -> Option<Value> {
        let area_code = area_code.trim();
        if area_code.is_empty() {
            Self::log_failure(
                "summary",
                &ScansanError::MissingIdentifier {
                    endpoint: "summary",
                    field: "area_code",
                },
            );
            return None;
        }

        let mut params = vec![("area_code", area_code)];
        if let Some(district) = area_code_district.map(str::trim).filter(|d| !d.is_empty()) {
            params.push(("area_code_district", district));
        }
        let url = self.build_url(&["area_codes", area_code, "summary"], &params);
        self.fetch("summary", &url).await
    }

    /// Builds an endpoint URL under the base URL with percent-encoded path
    /// segments and query parameters.
    pub(crate) fn build_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Runs one request and converts any failure into `None`.
    pub(crate) async fn fetch(&self, endpoint: &'static str, url: &Url) -> Option<Value> {
        match self.request_json(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                Self::log_failure(endpoint, &e);
                None
            }
        }
    }

    pub(crate) fn log_failure(endpoint: &'static str, error: &ScansanError) {
        tracing::warn!(endpoint, error = %error, "scansan request returned no result");
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// - [`ScansanError::Http`] on network failure or timeout.
    /// - [`ScansanError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ScansanError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<Value, ScansanError> {
        tracing::debug!(url = %url, "scansan request");
        let response = self
            .client
            .get(url.clone())
            .header(AUTH_HEADER, self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScansanError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ScansanError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
