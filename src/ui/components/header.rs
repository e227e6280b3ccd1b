//! Brand line with the theme toggle indicator.

use colored::Colorize;

use crate::domain::entities::Theme;
use crate::ui::style::{Palette, paint};

pub fn render(theme: Theme, palette: &Palette) -> String {
    let toggle = match theme {
        Theme::Light => "☀ light",
        Theme::Dark => "☾ dark",
    };

    format!(
        "{}  {}    {} {}",
        "🔗",
        paint("Link Studio", palette.accent).bold(),
        paint(toggle, palette.text),
        paint("(:theme)", palette.muted),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_theme() {
        colored::control::set_override(false);

        let light = render(Theme::Light, &Palette::for_theme(Theme::Light));
        let dark = render(Theme::Dark, &Palette::for_theme(Theme::Dark));

        assert!(light.contains("☀ light"));
        assert!(dark.contains("☾ dark"));
    }
}
