//! Toast notifications raised by UI operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient, non-blocking message reporting the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Sending half of the toast channel.
///
/// Cloned into every component that reports outcomes; the toast layer owns
/// the receiver. Sends never block and are dropped silently once the
/// receiver is gone.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Toast>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let notifier = Self {
            tx,
            next_id: Arc::new(AtomicU64::new(1)),
        };
        (notifier, rx)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    /// Logs `err` and raises an error toast if it has a user-facing message.
    pub fn report(&self, err: &AppError) {
        warn!(code = err.code(), "{}", err);
        if let Some(message) = err.user_message() {
            self.error(message);
        }
    }

    fn push(&self, level: ToastLevel, message: String) {
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            level,
            message,
            created_at: Utc::now(),
        };

        if self.tx.send(toast).is_err() {
            debug!("Toast dropped: no toast layer attached");
        }
    }
}
