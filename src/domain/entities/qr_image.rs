//! Encoded QR code for a short link.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// QR code derived from a short URL.
///
/// Holds the PNG payload used for downloads and a text rendering for the
/// terminal. Both are derived from `content` and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub content: String,
    pub png: Vec<u8>,
    pub terminal: String,
}

impl QrImage {
    pub fn new(content: impl Into<String>, png: Vec<u8>, terminal: String) -> Self {
        Self {
            content: content.into(),
            png,
            terminal,
        }
    }

    /// `data:` URL carrying the PNG, suitable for embedding in HTML.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}
