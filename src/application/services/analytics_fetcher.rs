//! Analytics panel data loading.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::domain::entities::PlatformShare;
use crate::domain::ports::AnalyticsApi;

/// Snapshot of the analytics panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    /// True until the summary fetch settles, successfully or not.
    pub loading: bool,
    pub shares: Vec<PlatformShare>,
    /// Raised shortly after loading ends; gates the legend cards.
    pub animation_complete: bool,
}

impl Default for AnalyticsView {
    fn default() -> Self {
        Self {
            loading: true,
            shares: Vec::new(),
            animation_complete: false,
        }
    }
}

/// Loads the platform breakdown once per page.
///
/// Failures never reach the user: they are logged and the chart stays empty
/// so a broken analytics backend cannot degrade the shortening flow.
pub struct AnalyticsFetcher {
    api: Arc<dyn AnalyticsApi>,
    view: watch::Sender<AnalyticsView>,
    started: AtomicBool,
    animation_delay: Duration,
    lifetime: CancellationToken,
}

impl AnalyticsFetcher {
    pub fn new(
        api: Arc<dyn AnalyticsApi>,
        animation_delay: Duration,
        lifetime: CancellationToken,
    ) -> Self {
        let (view, _rx) = watch::channel(AnalyticsView::default());
        Self {
            api,
            view,
            started: AtomicBool::new(false),
            animation_delay,
            lifetime,
        }
    }

    /// Fetches the summary and converts it to chart segments.
    ///
    /// Returns an empty vec on any network or parse error.
    pub async fn load_summary(&self) -> Vec<PlatformShare> {
        match self.api.fetch_summary().await {
            Ok(summary) => {
                let shares = summary.into_shares();
                debug!(segments = shares.len(), "Analytics summary loaded");
                shares
            }
            Err(e) => {
                error!(code = e.code(), "Analytics error: {}", e);
                Vec::new()
            }
        }
    }

    /// Starts the background load. Only the first call spawns a task.
    pub fn mount(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Analytics already mounted");
            return None;
        }

        let this = Arc::clone(self);
        Some(tokio::spawn(async move { this.run().await }))
    }

    pub fn view(&self) -> AnalyticsView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AnalyticsView> {
        self.view.subscribe()
    }

    async fn run(&self) {
        let shares = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => return,
            shares = self.load_summary() => shares,
        };

        self.view.send_modify(|view| {
            view.loading = false;
            view.shares = shares;
        });

        tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => return,
            _ = tokio::time::sleep(self.animation_delay) => {}
        }

        self.view.send_modify(|view| view.animation_complete = true);
    }
}
