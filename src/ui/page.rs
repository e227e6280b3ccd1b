//! Page composition: wires components together and owns their lifetime.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::application::services::{
    AnalyticsFetcher, RequesterSettings, ShortLinkRequester, Toast,
};
use crate::domain::entities::{Theme, ThemeAction};
use crate::domain::ports::{AnalyticsApi, ClipboardService, LinkApi, QrEncoder};
use crate::state::AppState;
use crate::ui::components::{ToastLayer, analytics_panel, features, header, shortener_panel};
use crate::ui::style::{Palette, rule};

const RULE_WIDTH: usize = 48;

/// Adapters the page's components talk to.
#[derive(Clone)]
pub struct PageDeps {
    pub link_api: Arc<dyn LinkApi>,
    pub analytics_api: Arc<dyn AnalyticsApi>,
    pub qr_encoder: Arc<dyn QrEncoder>,
    pub clipboard: Arc<dyn ClipboardService>,
}

/// Cosmetic timings for the page's components.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub requester: RequesterSettings,
    pub analytics_animation_delay: Duration,
    pub toast_auto_close: Duration,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            requester: RequesterSettings::default(),
            analytics_animation_delay: Duration::from_millis(100),
            toast_auto_close: Duration::from_millis(3000),
        }
    }
}

/// The single page of the application.
///
/// Every component shares one [`CancellationToken`]; dropping the page (or
/// calling [`Page::teardown`]) cancels in-flight requests and timers so
/// nothing updates state after the page is gone.
pub struct Page {
    state: AppState,
    requester: Arc<ShortLinkRequester>,
    analytics: Arc<AnalyticsFetcher>,
    toasts: ToastLayer,
    has_shortened: Arc<AtomicBool>,
    lifetime: CancellationToken,
}

impl Page {
    pub fn new(
        state: AppState,
        toasts: mpsc::UnboundedReceiver<Toast>,
        deps: PageDeps,
        options: PageOptions,
    ) -> Self {
        let lifetime = CancellationToken::new();
        let has_shortened = Arc::new(AtomicBool::new(false));

        let produced = Arc::clone(&has_shortened);
        let requester = ShortLinkRequester::new(
            deps.link_api,
            deps.qr_encoder,
            deps.clipboard,
            state.notifier.clone(),
            options.requester,
            lifetime.child_token(),
        )
        .with_callback(Arc::new(move |short_url: &str| {
            debug!(%short_url, "Link produced");
            produced.store(true, Ordering::SeqCst);
        }));

        let analytics = AnalyticsFetcher::new(
            deps.analytics_api,
            options.analytics_animation_delay,
            lifetime.child_token(),
        );

        let toasts = ToastLayer::new(toasts, state.theme.clone(), options.toast_auto_close);

        Self {
            state,
            requester: Arc::new(requester),
            analytics: Arc::new(analytics),
            toasts,
            has_shortened,
            lifetime,
        }
    }

    /// Starts the analytics load. Safe to call more than once.
    pub fn mount(&self) -> Option<JoinHandle<()>> {
        info!("Page mounted");
        self.analytics.mount()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn requester(&self) -> &Arc<ShortLinkRequester> {
        &self.requester
    }

    pub fn analytics(&self) -> &Arc<AnalyticsFetcher> {
        &self.analytics
    }

    /// Whether at least one link has been produced on this page.
    pub fn has_shortened(&self) -> bool {
        self.has_shortened.load(Ordering::SeqCst)
    }

    pub fn toggle_theme(&self) -> Theme {
        self.state.theme.toggle()
    }

    pub fn set_theme(&self, theme: Theme) -> Theme {
        self.state.theme.dispatch(ThemeAction::Set(theme))
    }

    /// Page sections in display order, styled with the current theme.
    ///
    /// Visible toasts sit above the header, newest first.
    pub fn sections(&self) -> Vec<String> {
        let theme = self.state.theme.current();
        let palette = Palette::for_theme(theme);

        let mut sections = Vec::new();
        if !self.toasts.visible().is_empty() {
            sections.push(self.toasts.render());
        }

        sections.extend([
            header::render(theme, &palette),
            rule(RULE_WIDTH, &palette),
            shortener_panel::render(&self.requester.view(), &palette),
            rule(RULE_WIDTH, &palette),
            analytics_panel::render(&self.analytics.view(), &palette),
            rule(RULE_WIDTH, &palette),
            features::render(&palette),
            features::render_footer(&palette),
        ]);
        sections
    }

    pub fn render(&self) -> String {
        self.sections().join("\n")
    }

    /// Collects newly raised toasts and drops expired ones.
    ///
    /// Returns the new arrivals rendered, newest first.
    pub fn pump_toasts(&mut self) -> Vec<String> {
        let arrived = self.toasts.pump();
        arrived
            .iter()
            .map(|toast| self.toasts.render_toast(toast))
            .collect()
    }

    pub fn visible_toasts(&self) -> &[Toast] {
        self.toasts.visible()
    }

    pub fn teardown(&self) {
        if !self.lifetime.is_cancelled() {
            info!("Page torn down");
            self.lifetime.cancel();
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
