//! Static marketing cards and footer.

use colored::Colorize;

use crate::ui::style::{Palette, paint};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Generate short URLs in seconds with our optimized infrastructure",
    },
    Feature {
        icon: "📊",
        title: "Detailed Analytics",
        description: "Track clicks, platforms, and user engagement with beautiful charts",
    },
    Feature {
        icon: "🛡️",
        title: "Secure & Reliable",
        description: "Your URLs are protected with enterprise-grade security",
    },
];

pub fn render(palette: &Palette) -> String {
    FEATURES
        .iter()
        .map(|feature| {
            format!(
                "{} {}\n   {}",
                feature.icon,
                paint(feature.title, palette.text).bold(),
                paint(feature.description, palette.muted),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_footer(palette: &Palette) -> String {
    paint(
        "Commands: <url> shorten · :copy · :qr [path] · :theme · :help · :quit",
        palette.muted,
    )
    .to_string()
}
