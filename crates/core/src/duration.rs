//! Duration labels such as `"45 min"`.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CatalogError, Result};

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*(\d+)\s*(?:m|min|mins|minute|minutes)?\.?\s*$")
            .expect("duration pattern is valid")
    })
}

/// Parse a human duration label into whole minutes.
///
/// Accepts a leading minute count with an optional minute unit:
/// `"45 min"`, `"45min"`, `"45 minutes"`, `"45"`.
pub fn parse_minutes(label: &str) -> Result<u32> {
    label_pattern()
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| CatalogError::InvalidDuration(label.to_string()))
}

/// Format minutes the way the course header shows them: `"6h 15min"`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h {}min", minutes / 60, minutes % 60)
}

/// Convert minutes to fractional hours.
pub fn minutes_to_hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}
