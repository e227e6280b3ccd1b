//! Terminal presentation layer.
//!
//! Renders the page from component view state. Every renderer is a pure
//! function of a snapshot plus the [`style::Palette`] for the current theme,
//! so the whole page can be rendered to a `String` in tests.
//!
//! # Modules
//!
//! - [`page`] - Page composition and lifetime
//! - [`components`] - Header, requester panel, analytics panel, features, toasts
//! - [`style`] - Theme palettes and color helpers
//! - [`animation`] - Staggered section reveal

pub mod animation;
pub mod components;
pub mod page;
pub mod style;

pub use page::{Page, PageDeps, PageOptions};
