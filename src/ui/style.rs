//! Theme-dependent terminal styling.

use colored::{ColoredString, Colorize};

use crate::domain::entities::Theme;

pub type Rgb = (u8, u8, u8);

/// Colors resolved for one theme. Components read it at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub link: Rgb,
    pub success: Rgb,
    pub error: Rgb,
    pub border: Rgb,
    pub toast_text: Rgb,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: (0x37, 0x41, 0x51),
                muted: (0x6B, 0x72, 0x80),
                accent: (0x3B, 0x82, 0xF6),
                link: (0x25, 0x63, 0xEB),
                success: (0x16, 0xA3, 0x4A),
                error: (0xDC, 0x26, 0x26),
                border: (0xD1, 0xD5, 0xDB),
                toast_text: (0x00, 0x00, 0x00),
            },
            Theme::Dark => Self {
                text: (0xE5, 0xE7, 0xEB),
                muted: (0x9C, 0xA3, 0xAF),
                accent: (0x60, 0xA5, 0xFA),
                link: (0x60, 0xA5, 0xFA),
                success: (0x4A, 0xDE, 0x80),
                error: (0xF8, 0x71, 0x71),
                border: (0x4B, 0x55, 0x63),
                toast_text: (0xFF, 0xFF, 0xFF),
            },
        }
    }
}

pub fn paint(text: &str, rgb: Rgb) -> ColoredString {
    text.truecolor(rgb.0, rgb.1, rgb.2)
}

/// Horizontal separator spanning `width` columns.
pub fn rule(width: usize, palette: &Palette) -> String {
    paint(&"─".repeat(width), palette.border).to_string()
}

/// Parses `#RGB` or `#RRGGBB`.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        3 => {
            let mut chars = digits.chars().map(|c| c.to_string().repeat(2));
            Some((
                channel(&chars.next()?)?,
                channel(&chars.next()?)?,
                channel(&chars.next()?)?,
            ))
        }
        6 => Some((
            channel(digits.get(0..2)?)?,
            channel(digits.get(2..4)?)?,
            channel(digits.get(4..6)?)?,
        )),
        _ => None,
    }
}
