//! QR encoder producing PNG bytes and a terminal rendering.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::render::unicode::Dense1x2;
use tracing::debug;

use crate::domain::entities::QrImage;
use crate::domain::ports::QrEncoder;
use crate::error::AppError;

/// Default edge length of the downloadable PNG, in pixels.
pub const DEFAULT_PNG_SIZE: u32 = 256;

/// [`QrEncoder`] backed by the `qrcode` and `image` crates.
#[derive(Debug, Clone)]
pub struct PngQrEncoder {
    png_size: u32,
}

impl PngQrEncoder {
    pub fn new(png_size: u32) -> Self {
        Self { png_size }
    }
}

impl Default for PngQrEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_PNG_SIZE)
    }
}

impl QrEncoder for PngQrEncoder {
    fn encode(&self, data: &str) -> Result<QrImage, AppError> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| AppError::qr(e.to_string()))?;

        let pixels = code
            .render::<Luma<u8>>()
            .min_dimensions(self.png_size, self.png_size)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(pixels)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| AppError::qr(format!("PNG encoding failed: {e}")))?;

        // Inverted so the code reads correctly on dark terminal backgrounds.
        let terminal = code
            .render::<Dense1x2>()
            .dark_color(Dense1x2::Light)
            .light_color(Dense1x2::Dark)
            .quiet_zone(true)
            .build();

        debug!(bytes = png.len(), "Encoded QR code");

        Ok(QrImage::new(data, png, terminal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_produces_png() {
        let qr = PngQrEncoder::default().encode("https://s.ly/abc").unwrap();

        assert_eq!(qr.content, "https://s.ly/abc");
        assert!(qr.png.starts_with(PNG_MAGIC));
        assert!(!qr.terminal.is_empty());
        assert!(qr.data_url().starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let encoder = PngQrEncoder::default();
        let a = encoder.encode("https://s.ly/xyz").unwrap();
        let b = encoder.encode("https://s.ly/xyz").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_rejects_oversized_data() {
        let data = "x".repeat(8000);
        let err = PngQrEncoder::default().encode(&data).unwrap_err();
        assert!(matches!(err, AppError::QrGeneration { .. }));
    }
}
