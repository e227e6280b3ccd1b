//! Domain layer: UI data model and port traits.
//!
//! Nothing here depends on the terminal, the network stack or the runtime.
//!
//! - [`entities`] - Theme, shorten payloads, platform shares, QR images
//! - [`ports`] - Traits implemented by `crate::infrastructure`

pub mod entities;
pub mod ports;
