//! Text formatting for SVG labels.

/// Escape text for use in SVG text nodes and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Compact tick label: `15500` → `15.5K`, `2500000` → `2.5M`, `1.23456` → `1.23`.
#[must_use]
pub fn format_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value == 0.0 {
        "0".to_string()
    } else {
        trim_decimals(&format!("{value:.2}"))
    }
}

/// Pie slice label with one decimal: `0.5` → `50.0%`.
#[must_use]
pub fn format_percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn trim_decimals(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

/// Format a number as an SVG coordinate with at most two decimals.
#[must_use]
pub fn coord(value: f64) -> String {
    let text = trim_decimals(&format!("{value:.2}"));
    if text == "-0" { "0".to_string() } else { text }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
