//! Port for the analytics summary endpoint.

use crate::domain::entities::PlatformSummary;
use crate::error::AppError;
use async_trait::async_trait;

/// Remote source of the per-platform click breakdown.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Fetches the platform summary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Network`] on transport failure or non-success
    /// status, [`AppError::MalformedResponse`] if the body is not a JSON
    /// object.
    async fn fetch_summary(&self) -> Result<PlatformSummary, AppError>;
}
