//! Port for clipboard access.

use crate::error::AppError;

/// Writes text to the platform clipboard.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - Native clipboard via `arboard`
/// - [`crate::infrastructure::clipboard::NullClipboard`] - Headless fallback, always denies
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardService: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Clipboard`] if the platform denies access.
    fn write_text(&self, text: &str) -> Result<(), AppError>;
}
