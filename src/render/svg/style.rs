//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Fill or stroke color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#1f77b4")
    Hex(String),
    /// No paint.
    None,
}

impl ChartColor {
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to an SVG paint value.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::None => "none".to_string(),
        }
    }

    /// Color at `t` in 0..=1 along evenly spaced `stops`.
    ///
    /// Stops that are not `#rrggbb` are treated as black.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn gradient(stops: &[&str], t: f64) -> Self {
        match stops {
            [] => Self::None,
            [only] => Self::hex(only),
            _ => {
                let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
                let segments = (stops.len() - 1) as f64;
                let position = t * segments;
                let index = (position.floor() as usize).min(stops.len() - 2);
                let local = position - index as f64;

                let from = parse_rgb(stops[index]);
                let to = parse_rgb(stops[index + 1]);
                let mix = |a: u8, b: u8| {
                    (f64::from(b) - f64::from(a))
                        .mul_add(local, f64::from(a))
                        .round() as u8
                };
                Self::Hex(format!(
                    "#{:02x}{:02x}{:02x}",
                    mix(from.0, to.0),
                    mix(from.1, to.1),
                    mix(from.2, to.2)
                ))
            }
        }
    }
}

fn parse_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
