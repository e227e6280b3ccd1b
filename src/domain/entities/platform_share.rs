//! Chart-ready platform breakdown records.

use serde_json::{Map, Value};
use tracing::warn;

/// Color used for platform names missing from [`PLATFORM_COLORS`].
pub const FALLBACK_COLOR: &str = "#999";

/// Fixed palette keyed by platform name.
pub const PLATFORM_COLORS: &[(&str, &str)] = &[
    ("Desktop", "#3B82F6"),
    ("Mobile", "#8B5CF6"),
    ("Tablet", "#06B6D4"),
    ("Android", "#10B981"),
    ("iOS", "#F59E0B"),
    ("Unknown", "#9CA3AF"),
];

/// Share of tracked clicks attributed to one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformShare {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl PlatformShare {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        let color = color_for(&name).to_string();
        Self { name, value, color }
    }
}

/// Looks up the palette color for a platform name.
pub fn color_for(name: &str) -> &'static str {
    PLATFORM_COLORS
        .iter()
        .find(|(platform, _)| *platform == name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Raw `GET /dashboard/summary` payload: platform name to percentage.
///
/// Entries keep the backend's key order. Values are not required to sum
/// to 100.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformSummary(pub Map<String, Value>);

impl PlatformSummary {
    /// Converts the summary into chart segments, in response order.
    ///
    /// Numbers are taken as-is and numeric strings are parsed; any other
    /// value is skipped.
    pub fn into_shares(self) -> Vec<PlatformShare> {
        self.0
            .into_iter()
            .filter_map(|(name, value)| match numeric_value(&value) {
                Some(v) => Some(PlatformShare::new(name, v)),
                None => {
                    warn!(platform = %name, value = %value, "Skipping non-numeric platform share");
                    None
                }
            })
            .collect()
    }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
