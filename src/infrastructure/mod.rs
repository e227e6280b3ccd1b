//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the traits in [`crate::domain::ports`].
//!
//! # Modules
//!
//! - [`http`] - `reqwest` client for the shortening and analytics endpoints
//! - [`qr`] - QR code rendering (PNG and terminal)
//! - [`clipboard`] - Native and no-op clipboard access

pub mod clipboard;
pub mod http;
pub mod qr;
