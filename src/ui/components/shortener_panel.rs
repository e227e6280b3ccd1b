//! Requester panel: input hint, submit control, short link and QR code.

use colored::Colorize;

use crate::application::services::{RequesterState, RequesterView};
use crate::ui::style::{Palette, paint};

pub fn render(view: &RequesterView, palette: &Palette) -> String {
    let mut lines = vec![
        paint("URL Shortener", palette.accent).bold().to_string(),
        paint("Transform your long URLs into short links", palette.muted).to_string(),
        String::new(),
        submit_control(view.state, palette),
    ];

    if let Some(short_url) = &view.short_url {
        let copy_hint = if view.copied {
            paint("✓ copied", palette.success).to_string()
        } else {
            paint("(:copy)", palette.muted).to_string()
        };

        lines.push(String::new());
        lines.push(paint("Your shortened URL:", palette.text).bold().to_string());
        lines.push(format!(
            "  {}  {}",
            paint(short_url, palette.link).underline(),
            copy_hint
        ));
    }

    match (&view.qr, view.state) {
        (Some(qr), _) => {
            lines.push(String::new());
            lines.push(paint("QR Code", palette.text).to_string());
            lines.extend(qr.terminal.lines().map(|line| format!("  {line}")));
            lines.push(paint("  Download QR (:qr [path])", palette.muted).to_string());
        }
        (None, RequesterState::QrPending) => {
            lines.push(paint("  Preparing QR code...", palette.muted).to_string());
        }
        _ => {}
    }

    lines.join("\n")
}

fn submit_control(state: RequesterState, palette: &Palette) -> String {
    if state.is_busy() {
        paint("[ ⟳ Generating... ]", palette.muted).to_string()
    } else {
        paint("[ Shorten URL ]", palette.accent).bold().to_string()
    }
}
