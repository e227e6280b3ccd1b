//! Application layer: the stateful UI components.
//!
//! Services here hold view state in `tokio::sync::watch` channels, talk to
//! the outside world only through [`crate::domain::ports`], and report
//! outcomes as toasts. They know nothing about the terminal.
//!
//! # Available Services
//!
//! - [`services::theme_store::ThemeStore`] - Shared light/dark theme
//! - [`services::notifier::Notifier`] - Toast notifications
//! - [`services::short_link_requester::ShortLinkRequester`] - Shorten, QR, copy, download
//! - [`services::analytics_fetcher::AnalyticsFetcher`] - Platform breakdown chart data

pub mod services;
