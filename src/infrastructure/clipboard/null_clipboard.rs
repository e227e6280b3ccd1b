//! Clipboard implementation for headless sessions.

use tracing::debug;

use crate::domain::ports::ClipboardService;
use crate::error::AppError;

/// A clipboard that denies every write.
///
/// Used when `CLIPBOARD=none` or when running without a display server,
/// so copy failures surface as a regular error toast.
pub struct NullClipboard;

impl NullClipboard {
    pub fn new() -> Self {
        debug!("Using NullClipboard (clipboard disabled)");
        Self
    }
}

impl Default for NullClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardService for NullClipboard {
    fn write_text(&self, _text: &str) -> Result<(), AppError> {
        Err(AppError::clipboard("clipboard access is disabled"))
    }
}
