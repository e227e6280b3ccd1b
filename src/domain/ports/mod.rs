//! Port traits for the domain layer.
//!
//! The UI components talk to the outside world only through these traits.
//! Concrete adapters live in `crate::infrastructure`; mocks are generated
//! with `mockall` for unit tests.
//!
//! - [`LinkApi`] - Shortening endpoint
//! - [`AnalyticsApi`] - Platform summary endpoint
//! - [`QrEncoder`] - QR code rendering
//! - [`ClipboardService`] - System clipboard access

pub mod analytics_api;
pub mod clipboard;
pub mod link_api;
pub mod qr_encoder;

pub use analytics_api::AnalyticsApi;
pub use clipboard::ClipboardService;
pub use link_api::LinkApi;
pub use qr_encoder::QrEncoder;

#[cfg(test)]
pub use analytics_api::MockAnalyticsApi;
#[cfg(test)]
pub use clipboard::MockClipboardService;
#[cfg(test)]
pub use link_api::MockLinkApi;
#[cfg(test)]
pub use qr_encoder::MockQrEncoder;
