//! Shared theme state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::domain::entities::{Theme, ThemeAction};

/// Session-wide theme holder passed down through [`crate::state::AppState`].
///
/// Writes go through [`Theme::reduce`] inside a single `send_modify`, so a
/// toggle is one atomic flip. Consumers either read [`ThemeStore::current`]
/// at render time or [`ThemeStore::subscribe`] to be woken on change.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: Arc<watch::Sender<Theme>>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    /// Applies `action` and returns the resulting theme.
    pub fn dispatch(&self, action: ThemeAction) -> Theme {
        let mut next = Theme::default();
        self.tx.send_modify(|theme| {
            *theme = theme.reduce(action);
            next = *theme;
        });
        debug!(theme = %next, "Theme changed");
        next
    }

    pub fn toggle(&self) -> Theme {
        self.dispatch(ThemeAction::Toggle)
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
