//! # URL Shortener UI
//!
//! A terminal client for a remote URL-shortening service: shorten links,
//! show and save their QR codes, and chart click analytics by platform.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the ports adapters implement
//! - **Application Layer** ([`application`]) - Theme store, requester, analytics, toasts
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, QR encoder, clipboard
//! - **UI Layer** ([`ui`]) - Page composition and terminal rendering
//! - **App** ([`app`]) - Interactive session and one-shot commands
//!
//! ## Features
//!
//! - URL validation before any request is sent
//! - QR code preview in the terminal, PNG download
//! - Platform analytics chart with a fixed color palette
//! - Light and dark themes
//! - Toast notifications with auto-close
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="http://localhost:3000"
//!
//! # Interactive page
//! cargo run
//!
//! # One-shot
//! cargo run -- shorten https://example.com/some/long/path --save-qr code.png
//! cargo run -- summary
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod ui;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AnalyticsFetcher, Notifier, RequesterState, ShortLinkRequester, ThemeStore,
    };
    pub use crate::domain::entities::{PlatformShare, ShortenRequest, ShortenResult, Theme};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::ui::{Page, PageDeps, PageOptions};
}
