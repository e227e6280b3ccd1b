//! Terminal client for the URL shortener.
//!
//! # Usage
//!
//! ```bash
//! # Interactive page
//! url-shortener-ui
//!
//! # Shorten once, copy the link and save the QR code
//! url-shortener-ui shorten https://example.com/long --copy --save-qr qr.png
//!
//! # Print the analytics chart
//! url-shortener-ui --theme dark summary
//! ```

use url_shortener_ui::app::{self, SessionEnd};
use url_shortener_ui::config::{self, Config};
use url_shortener_ui::domain::entities::Theme;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shorten URLs, preview QR codes, and browse click analytics.
#[derive(Parser)]
#[command(name = "url-shortener-ui")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial theme (light or dark)
    #[arg(long, global = true)]
    theme: Option<Theme>,

    /// Disable the staggered page reveal
    #[arg(long, global = true)]
    no_animation: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive page (default)
    Page,

    /// Shorten a single URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Save the QR code as PNG
        #[arg(long, value_name = "PATH")]
        save_qr: Option<PathBuf>,

        /// Do not print the QR code
        #[arg(long)]
        no_qr: bool,
    },

    /// Print the platform analytics chart
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(theme) = cli.theme {
        config.initial_theme = theme;
    }
    if cli.no_animation {
        config.animations = false;
    }

    init_tracing(&config);
    config.print_summary();

    match cli.command.unwrap_or(Commands::Page) {
        Commands::Page => {
            if app::run_page(config).await? == SessionEnd::Interrupted {
                // The blocking prompt thread cannot be joined; leave now.
                std::process::exit(130);
            }
        }
        Commands::Shorten {
            url,
            copy,
            save_qr,
            no_qr,
        } => app::run_shorten(config, url, copy, save_qr, no_qr).await?,
        Commands::Summary => app::run_summary(config).await?,
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the rendered page.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
