//! Context shared by every UI component.

use tokio::sync::mpsc;

use crate::application::services::{Notifier, ThemeStore, Toast};
use crate::domain::entities::Theme;

/// Explicit context passed down to components instead of global state.
///
/// Cloning is cheap; clones share the same theme and toast channel.
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: ThemeStore,
    pub notifier: Notifier,
}

impl AppState {
    /// Creates the context and the receiving end of its toast channel.
    pub fn new(initial_theme: Theme) -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (notifier, toasts) = Notifier::channel();
        let state = Self {
            theme: ThemeStore::new(initial_theme),
            notifier,
        };
        (state, toasts)
    }
}
