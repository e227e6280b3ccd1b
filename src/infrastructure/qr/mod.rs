//! QR code rendering adapters.

mod png_encoder;

pub use png_encoder::PngQrEncoder;
