//! `reqwest`-backed client for the shortening and analytics endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{
    PlatformSummary, ShortenRequest, ShortenResponseBody, ShortenResult,
};
use crate::domain::ports::{AnalyticsApi, LinkApi};
use crate::error::AppError;

const SHORTEN_PATH: &str = "shortUrl";
const SUMMARY_PATH: &str = "dashboard/summary";

/// Client for the external URL shortening service.
///
/// Implements both [`LinkApi`] and [`AnalyticsApi`] against one base URL.
/// The underlying connection pool is shared, so the client is cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpShortenerApi {
    client: Client,
    base_url: String,
}

impl HttpShortenerApi {
    /// Builds a client for `base_url`.
    ///
    /// No request timeout is applied unless `timeout` is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Network`] if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl LinkApi for HttpShortenerApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, AppError> {
        let url = self.endpoint(SHORTEN_PATH);
        debug!(%url, original_url = %request.original_url, "Submitting shorten request");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_status(
                status.as_u16(),
                format!("POST {url} returned {status}"),
            ));
        }

        let body: ShortenResponseBody = response
            .json()
            .await
            .map_err(|e| AppError::malformed(format!("Invalid shorten response: {e}")))?;

        ShortenResult::try_from(body)
    }
}

#[async_trait]
impl AnalyticsApi for HttpShortenerApi {
    async fn fetch_summary(&self) -> Result<PlatformSummary, AppError> {
        let url = self.endpoint(SUMMARY_PATH);
        debug!(%url, "Fetching analytics summary");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_status(
                status.as_u16(),
                format!("GET {url} returned {status}"),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::malformed(format!("Invalid summary response: {e}")))?;

        match body {
            Value::Object(map) => Ok(PlatformSummary(map)),
            other => Err(AppError::malformed(format!(
                "Expected an object of platform shares, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let api = HttpShortenerApi::new("https://api.example.com/v1/", None).unwrap();
        assert_eq!(api.base_url(), "https://api.example.com/v1");
        assert_eq!(
            api.endpoint(SHORTEN_PATH),
            "https://api.example.com/v1/shortUrl"
        );
        assert_eq!(
            api.endpoint(SUMMARY_PATH),
            "https://api.example.com/v1/dashboard/summary"
        );
    }
}
