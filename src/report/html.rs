use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::template::{HTML_FOOTER, HTML_HEAD};
use super::{ReportAssembler, StatsByMetric};
use crate::Result;
use crate::chart::ChartKind;
use crate::orchestrator::{BatchOutcome, JobSuccess};
use crate::render::svg::html_escape;
use crate::render::write_atomic;

pub const REPORT_FILE_NAME: &str = "report.html";

/// Writes a standalone `report.html` that links chart files by relative path.
#[derive(Debug, Clone)]
pub struct HtmlReportAssembler {
    title: String,
    dark_mode: bool,
    fingerprint: Option<String>,
}

impl HtmlReportAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Performance Test Results".to_string(),
            dark_mode: false,
            fingerprint: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Dataset fingerprint printed in the report header.
    #[must_use]
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Render the whole document. Deterministic for equal inputs.
    #[must_use]
    pub fn render(
        &self,
        artifacts: &BatchOutcome,
        stats_by_metric: &StatsByMetric,
        destination_dir: &Path,
    ) -> String {
        let mut output = HTML_HEAD.replace("{title}", &html_escape(&self.title));

        let body_class = if self.dark_mode { " class=\"dark\"" } else { "" };
        let _ = writeln!(output, "<body{body_class}>");
        output.push_str("    <div class=\"container\">\n");
        let _ = writeln!(output, "        <h1>{}</h1>", html_escape(&self.title));
        if let Some(fingerprint) = &self.fingerprint {
            let _ = writeln!(
                output,
                "        <p class=\"fingerprint\">Dataset <code>{}</code></p>",
                html_escape(fingerprint)
            );
        }

        Self::write_summary(&mut output, artifacts);
        Self::write_statistics(&mut output, stats_by_metric);
        Self::write_charts(&mut output, &artifacts.successes, destination_dir);
        Self::write_failures(&mut output, artifacts);

        output.push_str(HTML_FOOTER);
        output
    }

    fn write_summary(output: &mut String, artifacts: &BatchOutcome) {
        output.push_str("        <div class=\"summary-grid\">\n");
        let cards = [
            ("", artifacts.successes.len(), "Charts"),
            (" failed", artifacts.failures.len(), "Failed"),
        ];
        for (class, value, label) in cards {
            let _ = writeln!(
                output,
                r#"            <div class="summary-card{class}">
                <span class="value">{value}</span>
                <span class="label">{label}</span>
            </div>"#
            );
        }
        if !artifacts.cancelled.is_empty() {
            let _ = writeln!(
                output,
                r#"            <div class="summary-card">
                <span class="value">{}</span>
                <span class="label">Cancelled</span>
            </div>"#,
                artifacts.cancelled.len()
            );
        }
        output.push_str("        </div>\n");
    }

    fn write_statistics(output: &mut String, stats_by_metric: &StatsByMetric) {
        if stats_by_metric.is_empty() {
            return;
        }

        output.push_str("        <h2>Statistics</h2>\n");
        for (metric, stats) in stats_by_metric {
            let _ = writeln!(output, "        <h3>{}</h3>", html_escape(metric));
            output.push_str("        <div class=\"table-container\">\n");
            output.push_str("        <table>\n");
            output.push_str(
                "            <thead><tr><th>Suite</th><th>Min</th><th>Max</th><th>Avg</th><th>Std Dev</th></tr></thead>\n",
            );
            output.push_str("            <tbody>\n");
            for (suite, summary) in &stats.by_suite {
                let _ = writeln!(
                    output,
                    r#"                <tr><td>{}</td><td class="number">{:.2}</td><td class="number">{:.2}</td><td class="number">{:.2}</td><td class="number">{:.2}</td></tr>"#,
                    html_escape(suite),
                    summary.min,
                    summary.max,
                    summary.avg,
                    summary.std
                );
            }
            output.push_str("            </tbody>\n");
            output.push_str("        </table>\n");
            output.push_str("        </div>\n");
        }
    }

    fn write_charts(output: &mut String, successes: &[JobSuccess], destination_dir: &Path) {
        if successes.is_empty() {
            return;
        }

        output.push_str("        <h2>Charts</h2>\n");
        for success in successes {
            let heading = html_escape(&section_heading(success));
            let src = html_escape(&relative_link(&success.path, destination_dir));
            let _ = writeln!(
                output,
                r#"        <div class="chart-container" id="{id}">
            <h3>{heading}</h3>
            <img src="{src}" alt="{heading}">
        </div>"#,
                id = html_escape(success.id.as_str())
            );
        }
    }

    fn write_failures(output: &mut String, artifacts: &BatchOutcome) {
        if artifacts.failures.is_empty() {
            return;
        }

        output.push_str("        <h2>Failed Charts</h2>\n");
        output.push_str("        <ul class=\"failures\">\n");
        for failure in &artifacts.failures {
            let _ = writeln!(
                output,
                "            <li><code>{}</code>: {}</li>",
                html_escape(failure.id.as_str()),
                html_escape(&failure.error.to_string())
            );
        }
        output.push_str("        </ul>\n");
    }
}

impl Default for HtmlReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportAssembler for HtmlReportAssembler {
    fn assemble(
        &self,
        artifacts: &BatchOutcome,
        stats_by_metric: &StatsByMetric,
        destination_dir: &Path,
    ) -> Result<PathBuf> {
        let document = self.render(artifacts, stats_by_metric, destination_dir);
        let path = destination_dir.join(REPORT_FILE_NAME);
        write_atomic(&path, document.as_bytes())?;
        tracing::info!(
            path = %path.display(),
            charts = artifacts.successes.len(),
            failures = artifacts.failures.len(),
            "wrote report"
        );
        Ok(path)
    }
}

/// `"{metric} - Bar Chart"`, `"{y} vs {x} - Scatter Chart"`, `"Metrics Heatmap"`.
fn section_heading(success: &JobSuccess) -> String {
    let first = success.metrics.first().map_or("", String::as_str);
    match success.kind {
        ChartKind::Scatter => {
            let y = success.metrics.get(1).map_or("", String::as_str);
            format!("{y} vs {first} - {}", ChartKind::Scatter.label())
        }
        ChartKind::Heatmap => "Metrics Heatmap".to_string(),
        kind => format!("{first} - {}", kind.label()),
    }
}

/// Path of `artifact` relative to the report, always with `/` separators.
fn relative_link(artifact: &Path, destination_dir: &Path) -> String {
    let relative = artifact.strip_prefix(destination_dir).unwrap_or(artifact);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
