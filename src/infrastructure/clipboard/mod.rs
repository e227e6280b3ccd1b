//! Clipboard adapters.
//!
//! Provides two [`ClipboardService`](crate::domain::ports::ClipboardService)
//! implementations:
//! - [`SystemClipboard`] - Native clipboard via `arboard`
//! - [`NullClipboard`] - Headless fallback that always reports access denied

mod null_clipboard;
mod system_clipboard;

pub use null_clipboard::NullClipboard;
pub use system_clipboard::SystemClipboard;
