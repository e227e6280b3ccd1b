//! Page sections, each a pure function of view state and palette.

pub mod analytics_panel;
pub mod features;
pub mod header;
pub mod shortener_panel;
pub mod toast_layer;

pub use toast_layer::ToastLayer;
