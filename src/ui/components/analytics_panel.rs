//! Analytics panel: platform breakdown chart and legend.

use colored::Colorize;

use crate::application::services::AnalyticsView;
use crate::domain::entities::PlatformShare;
use crate::ui::style::{Palette, paint, parse_hex};

/// Columns used by the proportional bar.
pub const CHART_WIDTH: usize = 40;

pub fn render(view: &AnalyticsView, palette: &Palette) -> String {
    let mut lines = vec![
        paint("Click Analytics", palette.accent).bold().to_string(),
        paint("Traffic breakdown by platform", palette.muted).to_string(),
        String::new(),
    ];

    if view.loading {
        lines.push(paint(&"░".repeat(CHART_WIDTH), palette.border).to_string());
        lines.push(paint("Loading analytics...", palette.muted).to_string());
        return lines.join("\n");
    }

    lines.push(chart(&view.shares, palette));

    if view.animation_complete {
        lines.extend(view.shares.iter().map(|share| legend_entry(share, palette)));
    }

    lines.join("\n")
}

/// Splits `width` columns among the shares, proportionally to their values.
///
/// Boundaries are rounded cumulatively so the widths always add up to
/// `width` when the total is positive. Negative values count as zero.
pub fn segment_widths(shares: &[PlatformShare], width: usize) -> Vec<usize> {
    let total: f64 = shares.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return vec![0; shares.len()];
    }

    let mut widths = Vec::with_capacity(shares.len());
    let mut cumulative = 0.0;
    let mut previous_edge = 0usize;

    for share in shares {
        cumulative += share.value.max(0.0);
        let edge = ((cumulative / total) * width as f64).round() as usize;
        widths.push(edge.saturating_sub(previous_edge));
        previous_edge = edge;
    }

    widths
}

/// Formats a percentage without a trailing `.0` for whole numbers.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

fn chart(shares: &[PlatformShare], palette: &Palette) -> String {
    if shares.is_empty() {
        return paint(&"·".repeat(CHART_WIDTH), palette.border).to_string();
    }

    shares
        .iter()
        .zip(segment_widths(shares, CHART_WIDTH))
        .map(|(share, cells)| paint(&"█".repeat(cells), share_color(share, palette)).to_string())
        .collect()
}

fn legend_entry(share: &PlatformShare, palette: &Palette) -> String {
    format!(
        "  {} {:<10} {}",
        paint("●", share_color(share, palette)),
        paint(&share.name, palette.text),
        paint(&format_percent(share.value), palette.text).bold(),
    )
}

fn share_color(share: &PlatformShare, palette: &Palette) -> (u8, u8, u8) {
    parse_hex(&share.color).unwrap_or(palette.muted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Theme;

    fn shares() -> Vec<PlatformShare> {
        vec![
            PlatformShare::new("Desktop", 45.0),
            PlatformShare::new("Mobile", 35.0),
            PlatformShare::new("Tablet", 20.0),
        ]
    }

    fn palette() -> Palette {
        colored::control::set_override(false);
        Palette::for_theme(Theme::Dark)
    }

    #[test]
    fn test_segment_widths_sum_to_width() {
        assert_eq!(segment_widths(&shares(), 40), vec![18, 14, 8]);

        let uneven = vec![
            PlatformShare::new("A", 1.0),
            PlatformShare::new("B", 1.0),
            PlatformShare::new("C", 1.0),
        ];
        assert_eq!(segment_widths(&uneven, 40).iter().sum::<usize>(), 40);
    }

    #[test]
    fn test_segment_widths_zero_total() {
        let zeros = vec![PlatformShare::new("A", 0.0), PlatformShare::new("B", -3.0)];
        assert_eq!(segment_widths(&zeros, 40), vec![0, 0]);
        assert!(segment_widths(&[], 40).is_empty());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(45.0), "45%");
        assert_eq!(format_percent(12.5), "12.5%");
    }

    #[test]
    fn test_loading_skeleton() {
        let out = render(&AnalyticsView::default(), &palette());
        assert!(out.contains("Click Analytics"));
        assert!(out.contains("Loading analytics..."));
    }

    #[test]
    fn test_legend_after_animation() {
        let mut view = AnalyticsView {
            loading: false,
            shares: shares(),
            animation_complete: false,
        };

        let before = render(&view, &palette());
        assert_eq!(before.matches('█').count(), CHART_WIDTH);
        assert!(!before.contains("Desktop"));

        view.animation_complete = true;
        let after = render(&view, &palette());
        assert!(after.contains("Desktop"));
        assert!(after.contains("45%"));
        assert!(after.contains("35%"));
        assert!(after.contains("20%"));
    }

    #[test]
    fn test_empty_chart_has_no_segments() {
        let view = AnalyticsView {
            loading: false,
            shares: vec![],
            animation_complete: true,
        };
        let out = render(&view, &palette());
        assert_eq!(out.matches('█').count(), 0);
        assert!(!out.contains("Loading"));
    }
}
