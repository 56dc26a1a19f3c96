use crate::Result;
use crate::dataset::{Dataset, extract_series};

/// Suite-by-metric matrix of means. Rows follow `suites`, columns `metrics`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapMatrix {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<f64>>,
}

impl HeatmapMatrix {
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Smallest and largest cell, `None` when empty.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Mean over all cells, `None` when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        let count = self.cells.iter().map(Vec::len).sum::<usize>();
        (count > 0).then(|| self.cells.iter().flatten().sum::<f64>() / count as f64)
    }
}

/// Build the matrix of per-suite means for `metrics`.
///
/// # Errors
/// `MetricNotFound`, `SuiteNotFound` or `Schema` as reported by
/// [`extract_series`].
pub fn heatmap_matrix(
    suites: &[String],
    metrics: &[String],
    dataset: &Dataset,
) -> Result<HeatmapMatrix> {
    let mut columns = Vec::with_capacity(metrics.len());
    for metric in metrics {
        columns.push(extract_series(dataset, metric, Some(suites))?.means());
    }

    let cells = (0..suites.len())
        .map(|row| columns.iter().map(|column| column[row]).collect())
        .collect();

    Ok(HeatmapMatrix {
        rows: suites.to_vec(),
        columns: metrics.to_vec(),
        cells,
    })
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod tests;
