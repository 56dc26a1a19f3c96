use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PerfChartsError, Result};

pub const MIN_DPI: u32 = 72;
pub const MAX_DPI: u32 = 600;
pub const DEFAULT_DPI: u32 = 300;
/// Canvas size in inches.
pub const DEFAULT_CANVAS: (f64, f64) = (12.0, 8.0);

/// Named visual theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Seaborn,
    Ggplot,
    Minimal,
}

impl Theme {
    pub const ALL: [Self; 4] = [Self::Default, Self::Seaborn, Self::Ggplot, Self::Minimal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Seaborn => "seaborn",
            Self::Ggplot => "ggplot",
            Self::Minimal => "minimal",
        }
    }

    /// Series colors in assignment order.
    #[must_use]
    pub const fn palette(self) -> &'static [&'static str] {
        match self {
            Self::Default => &[
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ],
            Self::Seaborn => &[
                "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3",
                "#8c8c8c", "#ccb974", "#64b5cd",
            ],
            Self::Ggplot => &[
                "#e24a33", "#348abd", "#988ed5", "#777777", "#fbc15e", "#8eba42", "#ffb5b8",
            ],
            Self::Minimal => &[
                "#4878d0", "#ee854a", "#6acc64", "#d65f5f", "#956cb4", "#8c613c", "#dc7ec0",
                "#797979", "#d5bb67", "#82c6e2",
            ],
        }
    }

    const fn light_colors(self) -> ThemeColors {
        match self {
            Self::Default => ThemeColors {
                background: "#ffffff",
                plot_background: "#ffffff",
                text: "#1e293b",
                muted: "#64748b",
                grid: "#cbd5e1",
            },
            Self::Seaborn => ThemeColors {
                background: "#ffffff",
                plot_background: "#eaeaf2",
                text: "#262626",
                muted: "#555555",
                grid: "#ffffff",
            },
            Self::Ggplot => ThemeColors {
                background: "#ffffff",
                plot_background: "#e5e5e5",
                text: "#333333",
                muted: "#555555",
                grid: "#ffffff",
            },
            Self::Minimal => ThemeColors {
                background: "#ffffff",
                plot_background: "#ffffff",
                text: "#262626",
                muted: "#6b7280",
                grid: "#dddddd",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PerfChartsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                PerfChartsError::InvalidStyle(format!(
                    "unknown theme '{s}', expected one of: default, seaborn, ggplot, minimal"
                ))
            })
    }
}

/// Resolved colors for one theme and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub plot_background: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub grid: &'static str,
}

const DARK_COLORS: ThemeColors = ThemeColors {
    background: "#222222",
    plot_background: "#222222",
    text: "#eeeeee",
    muted: "#aaaaaa",
    grid: "#444444",
};

/// Dark mode uses one evenly spaced hue palette for every theme.
const DARK_PALETTE: &[&str] = &[
    "#f77189", "#d58c32", "#a4a031", "#50b131", "#36ada4", "#3ba3ec", "#bb83f4", "#f561dd",
];

const HEATMAP_LIGHT: &[&str] = &["#2d5016", "#61a5c2", "#ffd60a", "#ff8500", "#d62828"];
const HEATMAP_DARK: &[&str] = &["#0d1421", "#1f4e79", "#00b4d8", "#ffd60a", "#ff8500"];

/// Everything a renderer needs to know about appearance.
///
/// Threaded explicitly through every chart job; there is no global style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleContext {
    theme: Theme,
    dark_mode: bool,
    dpi: u32,
    canvas: (f64, f64),
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            dark_mode: false,
            dpi: DEFAULT_DPI,
            canvas: DEFAULT_CANVAS,
        }
    }
}

impl StyleContext {
    /// # Errors
    /// Returns `InvalidStyle` if `dpi` is outside 72..=600 or a canvas
    /// dimension is not a positive finite number.
    pub fn new(theme: Theme, dark_mode: bool, dpi: u32, canvas: (f64, f64)) -> Result<Self> {
        if !(MIN_DPI..=MAX_DPI).contains(&dpi) {
            return Err(PerfChartsError::InvalidStyle(format!(
                "DPI must be between {MIN_DPI} and {MAX_DPI}, got {dpi}"
            )));
        }
        let (w, h) = canvas;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(PerfChartsError::InvalidStyle(format!(
                "canvas size must be positive, got ({w}, {h})"
            )));
        }
        Ok(Self {
            theme,
            dark_mode,
            dpi,
            canvas,
        })
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub const fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Canvas size in inches.
    #[must_use]
    pub const fn canvas(&self) -> (f64, f64) {
        self.canvas
    }

    #[must_use]
    pub const fn palette(&self) -> &'static [&'static str] {
        if self.dark_mode {
            DARK_PALETTE
        } else {
            self.theme.palette()
        }
    }

    #[must_use]
    pub const fn colors(&self) -> ThemeColors {
        if self.dark_mode {
            DARK_COLORS
        } else {
            self.theme.light_colors()
        }
    }

    /// Color stops for heatmap cells, low to high.
    #[must_use]
    pub const fn heatmap_stops(&self) -> &'static [&'static str] {
        if self.dark_mode {
            HEATMAP_DARK
        } else {
            HEATMAP_LIGHT
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
