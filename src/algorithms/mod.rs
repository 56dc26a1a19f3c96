//! Pure data transforms feeding each chart kind.
//!
//! Everything here is deterministic and free of I/O, so the same inputs
//! always produce the same chart geometry regardless of which worker runs it.

mod heatmap;
mod histogram;
mod kde;
mod palette;
mod pie;
mod stack;
mod trend;

use thiserror::Error;

pub use heatmap::{HeatmapMatrix, heatmap_matrix};
pub use histogram::{DEFAULT_HISTOGRAM_BINS, HistogramBin, histogram_bins};
pub use kde::{KDE_POINTS, kde_curve};
pub use palette::{MARKER_CYCLE, MarkerShape, PaletteEntry, palette_assign};
pub use pie::pie_shares;
pub use stack::{StackLayer, stack_accumulate, stack_layers};
pub use trend::{TrendLine, iteration_axis, trend_line};

/// Input that a transform cannot turn into chart geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("no values to chart")]
    NoValues,

    #[error("value {value} at position {index} is negative")]
    NegativeShare { index: usize, value: f64 },

    #[error("values sum to zero")]
    ZeroTotal,
}
