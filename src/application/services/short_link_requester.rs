//! Short-link requester: validation, submission, QR generation, copy and
//! download.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::application::services::notifier::Notifier;
use crate::domain::entities::{QrImage, ShortenRequest, ShortenResult, is_valid_url};
use crate::domain::ports::{ClipboardService, LinkApi, QrEncoder};
use crate::error::AppError;

/// Requester lifecycle.
///
/// ```text
/// Idle -> Validating -> Invalid -> Idle
///                    -> Submitting -> Failed -> Idle
///                                  -> Succeeded -> QrPending -> QrReady
///                                                            -> QrFailed
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequesterState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Failed,
    Succeeded,
    QrPending,
    QrReady,
    QrFailed,
}

impl RequesterState {
    /// Whether a new submission may start from this state.
    pub fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle | Self::QrReady | Self::QrFailed)
    }

    /// Whether the submit control should be rendered disabled.
    pub fn is_busy(self) -> bool {
        !self.accepts_submit()
    }
}

/// Snapshot of everything the requester panel renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequesterView {
    pub state: RequesterState,
    pub short_url: Option<String>,
    pub qr: Option<QrImage>,
    pub copied: bool,
}

/// Cosmetic timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequesterSettings {
    /// Pause between receiving the short link and revealing its QR code.
    pub qr_reveal_delay: Duration,
    /// How long the "copied" indicator stays on.
    pub copied_reset: Duration,
}

impl Default for RequesterSettings {
    fn default() -> Self {
        Self {
            qr_reveal_delay: Duration::from_millis(2000),
            copied_reset: Duration::from_millis(2000),
        }
    }
}

/// Observer invoked with every short link the requester produces.
pub type LinkProducedCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Turns user input into a short link with a QR code.
///
/// All outcomes are reported through the [`Notifier`]; the returned
/// `Result` is for callers that need to branch on it (the one-shot CLI and
/// tests). Work is bound to `lifetime`: once it is cancelled, in-flight
/// operations stop without touching state or raising toasts.
pub struct ShortLinkRequester {
    api: Arc<dyn LinkApi>,
    qr_encoder: Arc<dyn QrEncoder>,
    clipboard: Arc<dyn ClipboardService>,
    notifier: Notifier,
    settings: RequesterSettings,
    view: Arc<watch::Sender<RequesterView>>,
    copy_epoch: Arc<AtomicU64>,
    on_link_produced: Option<LinkProducedCallback>,
    lifetime: CancellationToken,
}

impl ShortLinkRequester {
    pub fn new(
        api: Arc<dyn LinkApi>,
        qr_encoder: Arc<dyn QrEncoder>,
        clipboard: Arc<dyn ClipboardService>,
        notifier: Notifier,
        settings: RequesterSettings,
        lifetime: CancellationToken,
    ) -> Self {
        let (view, _rx) = watch::channel(RequesterView::default());
        Self {
            api,
            qr_encoder,
            clipboard,
            notifier,
            settings,
            view: Arc::new(view),
            copy_epoch: Arc::new(AtomicU64::new(0)),
            on_link_produced: None,
            lifetime,
        }
    }

    /// Registers the observer called once a link and its QR code are ready.
    pub fn with_callback(mut self, callback: LinkProducedCallback) -> Self {
        self.on_link_produced = Some(callback);
        self
    }

    /// True iff `input` is an absolute URL with a host.
    pub fn validate(input: &str) -> bool {
        is_valid_url(input)
    }

    pub fn view(&self) -> RequesterView {
        self.view.borrow().clone()
    }

    pub fn state(&self) -> RequesterState {
        self.view.borrow().state
    }

    pub fn subscribe(&self) -> watch::Receiver<RequesterView> {
        self.view.subscribe()
    }

    /// Validates `input`, submits it and renders the QR code for the result.
    ///
    /// # Errors
    ///
    /// - [`AppError::SubmissionInFlight`] if a previous submission has not
    ///   settled; nothing else happens.
    /// - [`AppError::Validation`] for blank or non-URL input; no request is sent.
    /// - [`AppError::Network`] / [`AppError::MalformedResponse`] from the backend.
    /// - [`AppError::QrGeneration`] if the link was produced but its QR code
    ///   could not be rendered.
    /// - [`AppError::Cancelled`] if the owning page was torn down meanwhile.
    pub async fn shorten(&self, input: &str) -> Result<ShortenResult, AppError> {
        if self.lifetime.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        if !self.begin_submission() {
            debug!("Submission rejected: requester busy");
            return Err(AppError::SubmissionInFlight);
        }

        let request = match ShortenRequest::parse(input) {
            Ok(request) => request,
            Err(err) => {
                self.set_state(RequesterState::Invalid);
                self.notifier.report(&err);
                self.set_state(RequesterState::Idle);
                return Err(err);
            }
        };

        self.view.send_modify(|view| {
            view.state = RequesterState::Submitting;
            view.short_url = None;
            view.qr = None;
            view.copied = false;
        });

        let outcome = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => return Err(AppError::Cancelled),
            outcome = self.api.shorten(&request) => outcome,
        };

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                self.set_state(RequesterState::Failed);
                self.notifier.report(&err);
                self.set_state(RequesterState::Idle);
                return Err(err);
            }
        };

        info!(original_url = %request.original_url, short_url = %result.short_url, "Short link created");

        self.view.send_modify(|view| {
            view.state = RequesterState::Succeeded;
            view.short_url = Some(result.short_url.clone());
        });
        self.set_state(RequesterState::QrPending);

        if !self.settings.qr_reveal_delay.is_zero() {
            tokio::select! {
                biased;
                _ = self.lifetime.cancelled() => return Err(AppError::Cancelled),
                _ = tokio::time::sleep(self.settings.qr_reveal_delay) => {}
            }
        }

        match self.qr_encoder.encode(&result.short_url) {
            Ok(qr) => {
                self.view.send_modify(|view| {
                    view.state = RequesterState::QrReady;
                    view.qr = Some(qr);
                });

                if let Some(callback) = &self.on_link_produced {
                    callback(&result.short_url);
                }
                self.notifier.success("URL shortened successfully!");

                Ok(result)
            }
            Err(err) => {
                self.set_state(RequesterState::QrFailed);
                self.notifier.report(&err);
                Err(err)
            }
        }
    }

    /// Copies the current short link to the clipboard.
    ///
    /// On success the `copied` flag is raised and lowered again after
    /// [`RequesterSettings::copied_reset`]. Must be called inside a Tokio
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Clipboard`] if there is no short link or the
    /// platform denies access.
    pub async fn copy(&self) -> Result<(), AppError> {
        let short_url = self.view.borrow().short_url.clone();

        let result = match short_url {
            Some(short_url) => self.clipboard.write_text(&short_url),
            None => Err(AppError::clipboard("No short URL to copy")),
        };

        if let Err(err) = result {
            self.notifier.report(&err);
            return Err(err);
        }

        let epoch = self.copy_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.send_modify(|view| view.copied = true);
        self.notifier.success("URL copied to clipboard!");

        let view = Arc::clone(&self.view);
        let copy_epoch = Arc::clone(&self.copy_epoch);
        let lifetime = self.lifetime.clone();
        let reset_after = self.settings.copied_reset;

        tokio::spawn(async move {
            tokio::select! {
                _ = lifetime.cancelled() => {}
                _ = tokio::time::sleep(reset_after) => {
                    // A later copy owns the flag now.
                    if copy_epoch.load(Ordering::SeqCst) == epoch {
                        view.send_modify(|view| view.copied = false);
                    }
                }
            }
        });

        Ok(())
    }

    /// Saves the current QR code as a PNG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Download`] if there is no QR code or the file
    /// cannot be written.
    pub async fn download_qr(&self, path: &Path) -> Result<(), AppError> {
        let qr = self.view.borrow().qr.clone();

        let result = match qr {
            Some(qr) => tokio::fs::write(path, &qr.png)
                .await
                .map_err(|e| AppError::download(format!("{}: {e}", path.display()))),
            None => Err(AppError::download("No QR code to download")),
        };

        match result {
            Ok(()) => {
                info!(path = %path.display(), "QR code saved");
                self.notifier.success("QR code downloaded");
                Ok(())
            }
            Err(err) => {
                self.notifier.report(&err);
                Err(err)
            }
        }
    }

    /// Atomically moves an accepting state to `Validating`.
    fn begin_submission(&self) -> bool {
        self.view.send_if_modified(|view| {
            if view.state.accepts_submit() {
                view.state = RequesterState::Validating;
                true
            } else {
                false
            }
        })
    }

    fn set_state(&self, state: RequesterState) {
        if self.lifetime.is_cancelled() {
            warn!(?state, "Ignoring state change after teardown");
            return;
        }
        self.view.send_modify(|view| view.state = state);
    }
}
