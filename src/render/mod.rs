//! Chart artifact rendering.
//!
//! The orchestrator only sees the [`Renderer`] trait. [`SvgRenderer`] is the
//! production implementation; tests substitute renderers that fail, stall, or
//! declare shared global state.

pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::{ChartSpec, ComputedChart, StyleContext};
use crate::{PerfChartsError, Result};

/// Whether a renderer's drawing state is shared between concurrent jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendState {
    /// Each call builds its own document; calls never interfere.
    #[default]
    Isolated,
    /// Calls share process-wide drawing state (for example a global style
    /// sheet), so style-apply, draw, and save must not interleave.
    SharedGlobal,
}

/// Draws one computed chart to `destination`.
pub trait Renderer: Send + Sync {
    fn backend_state(&self) -> BackendState {
        BackendState::Isolated
    }

    /// Write the artifact for `chart`. Must not touch anything besides
    /// `destination` and its parent directory.
    ///
    /// # Errors
    /// Returns `Render` on I/O failure, `RenderRejected` when the chart
    /// cannot be drawn.
    fn render(
        &self,
        spec: &ChartSpec,
        chart: &ComputedChart,
        style: &StyleContext,
        destination: &Path,
    ) -> Result<()>;
}

/// Writes standalone SVG documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn render(
        &self,
        spec: &ChartSpec,
        chart: &ComputedChart,
        style: &StyleContext,
        destination: &Path,
    ) -> Result<()> {
        if chart.kind() != spec.kind() {
            return Err(PerfChartsError::RenderRejected {
                chart: spec.id().to_string(),
                reason: format!(
                    "computed {} data for a {} chart",
                    chart.kind(),
                    spec.kind()
                ),
            });
        }

        let document = svg::render_chart(spec, chart, style);
        write_atomic(destination, document.as_bytes())?;
        tracing::debug!(chart = %spec.id(), path = %destination.display(), "wrote chart");
        Ok(())
    }
}

/// Write `contents` next to `destination` and rename it into place, creating
/// the parent directory if needed. Reruns replace the previous file.
///
/// # Errors
/// Returns `Render` if the directory, temporary file, or rename fails.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> Result<()> {
    let render_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| PerfChartsError::Render { path, source }
    };

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(render_error(parent))?;
    }

    let temp = temp_path(destination);
    fs::write(&temp, contents).map_err(render_error(&temp))?;
    if let Err(source) = fs::rename(&temp, destination) {
        let _ = fs::remove_file(&temp);
        return Err(PerfChartsError::Render {
            path: destination.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn temp_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    destination.with_file_name(name)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
