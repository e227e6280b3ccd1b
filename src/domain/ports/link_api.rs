//! Port for the remote shortening endpoint.

use crate::domain::entities::{ShortenRequest, ShortenResult};
use crate::error::AppError;
use async_trait::async_trait;

/// Remote service that maps a long URL to a short link.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerApi`] - `POST {API_BASE}/shortUrl`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// Submits a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Network`] if the service is unreachable or answers
    /// with a non-success status.
    /// Returns [`AppError::MalformedResponse`] if the body has no usable
    /// `shortUrl`.
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, AppError>;
}
