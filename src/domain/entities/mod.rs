//! Core domain entities.
//!
//! Plain data carried between the UI components. All of them are transient:
//! built per request/response cycle and dropped with the page.
//!
//! - [`Theme`] - Light/dark UI theme and its reducer
//! - [`ShortenRequest`] / [`ShortenResult`] - Shortening endpoint payloads
//! - [`PlatformShare`] - One analytics chart segment
//! - [`QrImage`] - QR code rendered for a short link

pub mod platform_share;
pub mod qr_image;
pub mod short_link;
pub mod theme;

pub use platform_share::{PlatformShare, PlatformSummary};
pub use qr_image::QrImage;
pub use short_link::{ShortenRequest, ShortenResponseBody, ShortenResult, is_valid_url};
pub use theme::{Theme, ThemeAction};
