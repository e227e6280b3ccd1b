//! Session runners.
//!
//! Builds the page from [`Config`] and drives it either interactively or as
//! a one-shot command.

use crate::application::services::{RequesterSettings, RequesterState, ShortLinkRequester};
use crate::config::{ClipboardMode, Config};
use crate::domain::entities::Theme;
use crate::domain::ports::ClipboardService;
use crate::infrastructure::clipboard::{NullClipboard, SystemClipboard};
use crate::infrastructure::http::HttpShortenerApi;
use crate::infrastructure::qr::PngQrEncoder;
use crate::state::AppState;
use crate::ui::animation::Reveal;
use crate::ui::components::analytics_panel;
use crate::ui::style::{Palette, paint};
use crate::ui::{Page, PageDeps, PageOptions};

use anyhow::{Context, Result};
use colored::*;
use dialoguer::Input;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const HELP: &str = "\
  <url>          Shorten a URL
  :copy          Copy the short URL to the clipboard
  :qr [path]     Save the QR code as PNG
  :theme [name]  Toggle the theme, or switch to light/dark
  :help          Show this help
  :quit          Leave (Ctrl-C works too)";

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Interrupted,
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Submit(String),
    /// Toggle, or switch to the given theme.
    Theme(Option<Theme>),
    Copy,
    Download(Option<PathBuf>),
    Help,
    Quit,
    /// Blank line; re-renders the page.
    Empty,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Self::Submit(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "theme" | "t" if arg.is_empty() => Self::Theme(None),
            "theme" | "t" => match arg.parse() {
                Ok(theme) => Self::Theme(Some(theme)),
                Err(_) => Self::Unknown(line.to_string()),
            },
            "copy" | "c" => Self::Copy,
            "qr" | "download" => {
                Self::Download((!arg.is_empty()).then(|| PathBuf::from(arg)))
            }
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Builds the adapters selected by `config`.
///
/// With `hold_clipboard`, copies block until another program takes over the
/// clipboard, so a process about to exit does not take the link with it.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_deps(config: &Config, hold_clipboard: bool) -> Result<PageDeps> {
    let api = Arc::new(
        HttpShortenerApi::new(&config.api_base_url, config.http_timeout())
            .context("Failed to build HTTP client")?,
    );

    let clipboard: Arc<dyn ClipboardService> = match config.clipboard {
        ClipboardMode::System if hold_clipboard => {
            tracing::debug!("Clipboard enabled (system, held until replaced)");
            Arc::new(SystemClipboard::holding())
        }
        ClipboardMode::System => {
            tracing::debug!("Clipboard enabled (system)");
            Arc::new(SystemClipboard::new())
        }
        ClipboardMode::Disabled => {
            tracing::debug!("Clipboard disabled (NullClipboard)");
            Arc::new(NullClipboard::new())
        }
    };

    Ok(PageDeps {
        link_api: api.clone(),
        analytics_api: api,
        qr_encoder: Arc::new(PngQrEncoder::default()),
        clipboard,
    })
}

pub fn page_options(config: &Config) -> PageOptions {
    PageOptions {
        requester: RequesterSettings {
            qr_reveal_delay: Duration::from_millis(config.qr_reveal_delay_ms),
            copied_reset: Duration::from_millis(config.copied_reset_ms),
        },
        analytics_animation_delay: Duration::from_millis(config.analytics_animation_delay_ms),
        toast_auto_close: Duration::from_millis(config.toast_auto_close_ms),
    }
}

/// Builds an unmounted page wired to the real adapters.
pub fn build_page(config: &Config, options: PageOptions, hold_clipboard: bool) -> Result<Page> {
    let deps = build_deps(config, hold_clipboard)?;
    let (state, toasts) = AppState::new(config.initial_theme);
    Ok(Page::new(state, toasts, deps, options))
}

/// Runs the interactive page until `:quit` or Ctrl-C.
///
/// # Flow
///
/// 1. Mount the page (analytics load starts in the background)
/// 2. Render it, revealing sections one by one when animations are on
/// 3. Read a command, apply it, re-render with the current toast stack
pub async fn run_page(config: Config) -> Result<SessionEnd> {
    let mut page = build_page(&config, page_options(&config), false)?;
    let _analytics = page.mount();

    let reveal = if config.animations {
        Reveal::default()
    } else {
        Reveal::disabled()
    };
    reveal.play(&page.sections(), &mut io::stdout()).await?;

    let end = loop {
        let line = tokio::select! {
            line = read_line() => match line? {
                Some(line) => line,
                None => break SessionEnd::Interrupted,
            },
            _ = tokio::signal::ctrl_c() => break SessionEnd::Interrupted,
        };

        match SessionCommand::parse(&line) {
            SessionCommand::Submit(url) => tokio::select! {
                _ = submit(&mut page, &url) => {}
                _ = tokio::signal::ctrl_c() => break SessionEnd::Interrupted,
            },
            SessionCommand::Theme(None) => {
                let theme = page.toggle_theme();
                tracing::debug!(%theme, "Theme toggled");
            }
            SessionCommand::Theme(Some(theme)) => {
                page.set_theme(theme);
                tracing::debug!(%theme, "Theme set");
            }
            SessionCommand::Copy => {
                if let Err(e) = page.requester().copy().await {
                    tracing::debug!(code = e.code(), "Copy failed: {}", e);
                }
            }
            SessionCommand::Download(path) => {
                let path = path.unwrap_or_else(|| config.qr_output_path.clone());
                if let Err(e) = page.requester().download_qr(&path).await {
                    tracing::debug!(code = e.code(), "Download failed: {}", e);
                }
            }
            SessionCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            SessionCommand::Quit => break SessionEnd::Quit,
            SessionCommand::Empty => {}
            SessionCommand::Unknown(input) => {
                println!("{} {}", "Unknown command:".yellow(), input);
                println!("{}", HELP);
                continue;
            }
        }

        print_page(&mut page);
    };

    page.teardown();
    Ok(end)
}

/// Submits `url`, rendering the intermediate "Preparing QR code" state.
async fn submit(page: &mut Page, url: &str) {
    let requester = Arc::clone(page.requester());
    let mut view = requester.subscribe();
    let shorten = requester.shorten(url);
    tokio::pin!(shorten);

    loop {
        tokio::select! {
            result = &mut shorten => {
                if let Err(e) = result {
                    tracing::debug!(code = e.code(), "Submission ended: {}", e);
                }
                return;
            }
            changed = view.changed() => {
                if changed.is_err() {
                    let _ = (&mut shorten).await;
                    return;
                }
                let pending = view.borrow_and_update().state == RequesterState::QrPending;
                if pending {
                    print_page(page);
                }
            }
        }
    }
}

/// Pulls pending toasts into the page and prints it.
fn print_page(page: &mut Page) {
    page.pump_toasts();
    println!();
    println!("{}", page.render());
}

/// One-shot commands have no page on screen, so toasts print as they arrive.
fn print_toasts(page: &mut Page) {
    for toast in page.pump_toasts() {
        println!("{toast}");
    }
}

/// Reads one line from the prompt. `None` means the user pressed Ctrl-C.
async fn read_line() -> Result<Option<String>> {
    let input = tokio::task::spawn_blocking(|| {
        Input::<String>::new()
            .with_prompt("URL or :command")
            .allow_empty(true)
            .interact_text()
    })
    .await
    .context("Input task failed")?;

    prompt_outcome(input)
}

/// The prompt reads in raw mode, where Ctrl-C arrives as an interrupted
/// read instead of a signal.
fn prompt_outcome(input: Result<String, dialoguer::Error>) -> Result<Option<String>> {
    match input {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e).context("Failed to read input"),
    }
}

/// Shortens one URL and prints the result.
///
/// The copy runs last: on Linux the process keeps serving the clipboard
/// until another program replaces its contents.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the backend fails, or a
/// requested copy/save does not succeed.
pub async fn run_shorten(
    config: Config,
    url: String,
    copy: bool,
    save_qr: Option<PathBuf>,
    no_qr: bool,
) -> Result<()> {
    let mut options = page_options(&config);
    options.requester.qr_reveal_delay = Duration::ZERO;

    let mut page = build_page(&config, options, copy)?;
    let requester = Arc::clone(page.requester());

    let outcome = shorten_and_save(&requester, &url, save_qr).await;
    print_toasts(&mut page);

    let short_url = outcome?;
    let palette = Palette::for_theme(page.state().theme.current());
    println!();
    println!(
        "{} {}",
        "Short URL:".bold(),
        paint(&short_url, palette.link).underline()
    );

    if !no_qr && let Some(qr) = requester.view().qr {
        println!();
        println!("{}", qr.terminal);
    }

    if copy {
        if cfg!(target_os = "linux") && config.clipboard == ClipboardMode::System {
            eprintln!(
                "{}",
                "Holding the clipboard until it is replaced (Ctrl-C to stop)".dimmed()
            );
        }
        let copied = requester.copy().await;
        print_toasts(&mut page);
        copied?;
    }

    page.teardown();
    Ok(())
}

async fn shorten_and_save(
    requester: &ShortLinkRequester,
    url: &str,
    save_qr: Option<PathBuf>,
) -> Result<String> {
    let result = requester.shorten(url).await?;

    if let Some(path) = save_qr {
        requester.download_qr(&path).await?;
    }

    Ok(result.short_url)
}

/// Loads the analytics summary once and prints the chart.
pub async fn run_summary(config: Config) -> Result<()> {
    let mut options = page_options(&config);
    options.analytics_animation_delay = Duration::ZERO;

    let page = build_page(&config, options, false)?;
    if let Some(handle) = page.mount() {
        handle.await.context("Analytics task failed")?;
    }

    let view = page.analytics().view();
    let palette = Palette::for_theme(page.state().theme.current());
    println!("{}", analytics_panel::render(&view, &palette));

    if view.shares.is_empty() {
        println!();
        println!("{}", "No analytics data available".yellow());
    }

    page.teardown();
    io::stdout().flush()?;
    Ok(())
}
