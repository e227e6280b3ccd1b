//! Native clipboard implementation.

use std::sync::Mutex;

use arboard::Clipboard;
use tracing::{debug, warn};

use crate::domain::ports::ClipboardService;
use crate::error::AppError;

/// Clipboard backed by the platform's native API.
///
/// The handle is opened lazily on first use, so constructing this in a
/// headless session does not fail until a copy is actually attempted.
///
/// On Linux the copied text lives only as long as a handle serves it. A
/// holding clipboard blocks each write until another program replaces the
/// contents, for callers that exit right after copying.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<Clipboard>>,
    hold_until_replaced: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding() -> Self {
        Self {
            hold_until_replaced: true,
            ..Self::default()
        }
    }

    pub fn holds_until_replaced(&self) -> bool {
        self.hold_until_replaced
    }
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str, hold: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        clipboard.set().wait().text(text.to_string())
    } else {
        clipboard.set_text(text.to_string())
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str, _hold: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

impl ClipboardService for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| AppError::clipboard("clipboard lock poisoned"))?;

        if guard.is_none() {
            let clipboard = Clipboard::new().map_err(|e| {
                warn!("Failed to open system clipboard: {}", e);
                AppError::clipboard(e.to_string())
            })?;
            *guard = Some(clipboard);
        }

        match guard.as_mut() {
            Some(clipboard) => {
                set_text(clipboard, text, self.hold_until_replaced)
                    .map_err(|e| AppError::clipboard(e.to_string()))?;
                debug!("Copied {} bytes to clipboard", text.len());
                Ok(())
            }
            None => Err(AppError::clipboard("clipboard unavailable")),
        }
    }
}
