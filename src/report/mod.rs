//! HTML report composed from a finished batch.

mod html;
mod template;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::Result;
use crate::orchestrator::BatchOutcome;
use crate::stats::MetricStatistics;

pub use html::{HtmlReportAssembler, REPORT_FILE_NAME};

/// Statistics keyed by metric, in report order.
pub type StatsByMetric = IndexMap<String, Arc<MetricStatistics>>;

/// Turns batch artifacts and statistics into a single report document.
pub trait ReportAssembler {
    /// Write the report into `destination_dir` and return its path.
    ///
    /// # Errors
    /// Returns `Render` if the report cannot be written.
    fn assemble(
        &self,
        artifacts: &BatchOutcome,
        stats_by_metric: &StatsByMetric,
        destination_dir: &Path,
    ) -> Result<PathBuf>;
}
