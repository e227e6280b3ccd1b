//! Toast container: newest on top, auto-closing, styled by current theme.

use std::time::Duration;

use chrono::{TimeDelta, Utc};
use colored::Colorize;
use tokio::sync::mpsc;

use crate::application::services::{ThemeStore, Toast, ToastLevel};
use crate::ui::style::{Palette, paint};

pub struct ToastLayer {
    rx: mpsc::UnboundedReceiver<Toast>,
    theme: ThemeStore,
    auto_close: TimeDelta,
    visible: Vec<Toast>,
}

impl ToastLayer {
    pub fn new(rx: mpsc::UnboundedReceiver<Toast>, theme: ThemeStore, auto_close: Duration) -> Self {
        Self {
            rx,
            theme,
            auto_close: TimeDelta::from_std(auto_close).unwrap_or(TimeDelta::MAX),
            visible: Vec::new(),
        }
    }

    /// Takes pending toasts off the channel and drops expired ones.
    ///
    /// Returns the newly arrived toasts, newest first.
    pub fn pump(&mut self) -> Vec<Toast> {
        let mut arrived = Vec::new();
        while let Ok(toast) = self.rx.try_recv() {
            arrived.push(toast);
        }
        arrived.reverse();

        let now = Utc::now();
        let auto_close = self.auto_close;
        self.visible.retain(|toast| {
            toast
                .created_at
                .checked_add_signed(auto_close)
                .is_none_or(|expires| expires > now)
        });

        for toast in arrived.iter().rev() {
            self.visible.insert(0, toast.clone());
        }

        arrived
    }

    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }

    /// Renders one toast using the theme active right now.
    pub fn render_toast(&self, toast: &Toast) -> String {
        let palette = Palette::for_theme(self.theme.current());
        let (icon, accent) = match toast.level {
            ToastLevel::Success => ("✔", palette.success),
            ToastLevel::Error => ("✖", palette.error),
        };

        format!(
            "{} {}",
            paint(icon, accent).bold(),
            paint(&toast.message, palette.toast_text)
        )
    }

    /// Renders every visible toast, newest first.
    pub fn render(&self) -> String {
        self.visible
            .iter()
            .map(|toast| self.render_toast(toast))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::Notifier;
    use crate::domain::entities::Theme;

    fn layer(auto_close: Duration) -> (ToastLayer, Notifier, ThemeStore) {
        colored::control::set_override(false);
        let (notifier, rx) = Notifier::channel();
        let theme = ThemeStore::new(Theme::Light);
        (ToastLayer::new(rx, theme.clone(), auto_close), notifier, theme)
    }

    #[test]
    fn test_newest_on_top() {
        let (mut layer, notifier, _theme) = layer(Duration::from_secs(3));

        notifier.success("first");
        notifier.error("second");

        let arrived = layer.pump();
        assert_eq!(arrived[0].message, "second");
        assert_eq!(arrived[1].message, "first");

        notifier.success("third");
        layer.pump();

        let messages: Vec<_> = layer.visible().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["third", "second", "first"]);
    }

    #[test]
    fn test_auto_close() {
        let (mut layer, notifier, _theme) = layer(Duration::ZERO);

        notifier.success("gone soon");
        assert_eq!(layer.pump().len(), 1);

        // Expired toasts are pruned on the next pump.
        layer.pump();
        assert!(layer.visible().is_empty());
    }

    #[test]
    fn test_render_reads_theme_at_render_time() {
        let (mut layer, notifier, theme) = layer(Duration::from_secs(3));
        notifier.error("Failed to copy URL");
        layer.pump();

        let light = layer.render();
        theme.toggle();
        let dark = layer.render();

        assert!(light.contains("✖ Failed to copy URL"));
        assert!(dark.contains("Failed to copy URL"));
        assert_eq!(
            Palette::for_theme(theme.current()).toast_text,
            (255, 255, 255)
        );
    }
}
