//! Port for QR code rendering.

use crate::domain::entities::QrImage;
use crate::error::AppError;

/// Deterministically renders text into a [`QrImage`].
#[cfg_attr(test, mockall::automock)]
pub trait QrEncoder: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::QrGeneration`] if the data does not fit in a QR
    /// code or the image cannot be encoded.
    fn encode(&self, data: &str) -> Result<QrImage, AppError>;
}
