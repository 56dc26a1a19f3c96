use std::any::Any;
use std::collections::HashSet;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use super::cancel::CancellationToken;
use super::outcome::{BatchOutcome, JobFailure, JobSuccess};
use super::progress::BatchProgress;
use crate::chart::{ChartId, ChartSpec, ComputedChart, StyleContext};
use crate::dataset::Dataset;
use crate::render::{BackendState, Renderer};
use crate::stats::StatisticsCache;
use crate::{PerfChartsError, Result};

pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(60);

/// Batch-wide settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Maximum concurrent jobs; 0 is treated as 1.
    pub workers: usize,
    /// Jobs running longer than this are failures. `None` disables the check.
    ///
    /// The deadline is checked once the chart data is computed, before the
    /// render starts, and again when the job ends. A render that has started
    /// runs to completion and keeps its worker until then.
    pub job_timeout: Option<Duration>,
    /// Directory artifacts are written into.
    pub output_dir: PathBuf,
    /// Style for specs that carry none of their own.
    pub style: StyleContext,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            job_timeout: Some(DEFAULT_JOB_TIMEOUT),
            output_dir: PathBuf::from("charts"),
            style: StyleContext::default(),
        }
    }
}

impl BatchConfig {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub const fn with_job_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.job_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleContext) -> Self {
        self.style = style;
        self
    }
}

enum JobResult {
    Succeeded(JobSuccess),
    Failed(PerfChartsError),
    Cancelled,
}

/// Runs chart jobs on a bounded worker pool.
///
/// Each job computes its chart data (through the shared statistics cache)
/// and hands it to the renderer. A failing or panicking job is recorded and
/// never affects its siblings.
pub struct Orchestrator<'a, R: Renderer> {
    dataset: &'a Dataset,
    cache: &'a StatisticsCache,
    renderer: &'a R,
    config: BatchConfig,
    cancel: CancellationToken,
}

impl<'a, R: Renderer> Orchestrator<'a, R> {
    #[must_use]
    pub fn new(
        dataset: &'a Dataset,
        cache: &'a StatisticsCache,
        renderer: &'a R,
        config: BatchConfig,
    ) -> Self {
        Self {
            dataset,
            cache,
            renderer,
            config,
            cancel: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Token that cancels jobs of this orchestrator that have not started yet.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    #[must_use]
    pub const fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run every spec without a visible progress bar.
    ///
    /// # Errors
    /// See [`Self::run_with_progress`].
    pub fn run(&self, specs: Vec<ChartSpec>) -> Result<BatchOutcome> {
        let progress = BatchProgress::hidden(specs.len() as u64);
        self.run_with_progress(specs, &progress)
    }

    /// Run every spec, reporting each finished job to `progress`.
    ///
    /// # Errors
    /// - `EmptySpecList` if `specs` is empty (nothing is scheduled)
    /// - `WorkerPool` if the thread pool cannot be created
    ///
    /// Per-job errors never surface here; they are in the outcome.
    pub fn run_with_progress(
        &self,
        specs: Vec<ChartSpec>,
        progress: &BatchProgress,
    ) -> Result<BatchOutcome> {
        if specs.is_empty() {
            return Err(PerfChartsError::EmptySpecList);
        }

        let workers = self.config.workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("perf-charts-worker-{i}"))
            .build()
            .map_err(|e| PerfChartsError::WorkerPool(e.to_string()))?;

        let mut outcome = BatchOutcome::default();
        let mut seen = HashSet::with_capacity(specs.len());
        let mut jobs = Vec::with_capacity(specs.len());
        for spec in specs {
            let id = spec.id();
            if seen.insert(id.clone()) {
                jobs.push((id, spec));
            } else {
                tracing::warn!(chart = %id, "duplicate chart id, skipping");
                progress.inc();
                outcome.failures.push(JobFailure {
                    error: PerfChartsError::DuplicateChart(id.to_string()),
                    id,
                });
            }
        }

        let gate = self.needs_render_gate(&jobs).then(|| Mutex::new(()));
        tracing::info!(
            jobs = jobs.len(),
            workers,
            serialized_render = gate.is_some(),
            "starting chart batch"
        );

        let results: Vec<(ChartId, JobResult)> = pool.install(|| {
            jobs.par_iter()
                .map(|(id, spec)| {
                    let result = self.run_job(id, spec, gate.as_ref());
                    progress.inc();
                    (id.clone(), result)
                })
                .collect()
        });

        for (id, result) in results {
            match result {
                JobResult::Succeeded(success) => outcome.successes.push(success),
                JobResult::Failed(error) => outcome.failures.push(JobFailure { id, error }),
                JobResult::Cancelled => outcome.cancelled.push(id),
            }
        }
        outcome.sort();

        tracing::info!(
            succeeded = outcome.successes.len(),
            failed = outcome.failures.len(),
            cancelled = outcome.cancelled.len(),
            "chart batch finished"
        );
        Ok(outcome)
    }

    /// Serialize rendering only for shared-state renderers in mixed-style batches.
    fn needs_render_gate(&self, jobs: &[(ChartId, ChartSpec)]) -> bool {
        if self.renderer.backend_state() != BackendState::SharedGlobal {
            return false;
        }
        let mut styles = jobs.iter().map(|(_, spec)| self.style_for(spec));
        styles
            .next()
            .is_some_and(|first| styles.any(|style| style != first))
    }

    fn style_for<'s>(&'s self, spec: &'s ChartSpec) -> &'s StyleContext {
        spec.style().unwrap_or(&self.config.style)
    }

    fn run_job(&self, id: &ChartId, spec: &ChartSpec, gate: Option<&Mutex<()>>) -> JobResult {
        if self.cancel.is_cancelled() {
            tracing::debug!(chart = %id, "cancelled before start");
            return JobResult::Cancelled;
        }

        let started = Instant::now();
        let destination = self.config.output_dir.join(id.file_name());
        let result = catch_unwind(AssertUnwindSafe(|| {
            self.execute(spec, &destination, gate, started)
        }));
        let elapsed = started.elapsed();

        let result = match result {
            Ok(Ok(())) => self.check_timeout(elapsed),
            Ok(Err(error)) => Err(error),
            Err(payload) => Err(PerfChartsError::JobPanicked(panic_message(payload.as_ref()))),
        };

        match result {
            Ok(()) => {
                tracing::debug!(chart = %id, elapsed_ms = elapsed.as_millis(), "chart done");
                JobResult::Succeeded(JobSuccess {
                    id: id.clone(),
                    kind: spec.kind(),
                    metrics: spec.metrics().to_vec(),
                    title: spec.title(),
                    path: destination,
                    elapsed,
                })
            }
            Err(error) => {
                tracing::warn!(chart = %id, error = %error, "chart failed");
                JobResult::Failed(error)
            }
        }
    }

    fn execute(
        &self,
        spec: &ChartSpec,
        destination: &Path,
        gate: Option<&Mutex<()>>,
        started: Instant,
    ) -> Result<()> {
        let style = self.style_for(spec);
        let chart = ComputedChart::compute(spec, self.dataset, self.cache, style)?;
        // Past the deadline already: skip the render gate and leave no artifact.
        self.check_timeout(started.elapsed())?;

        match gate {
            Some(lock) => {
                let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
                self.renderer.render(spec, &chart, style, destination)
            }
            None => self.renderer.render(spec, &chart, style, destination),
        }
    }

    fn check_timeout(&self, elapsed: Duration) -> Result<()> {
        match self.config.job_timeout {
            Some(limit) if elapsed > limit => Err(PerfChartsError::JobTimedOut {
                elapsed_ms: elapsed.as_millis(),
                limit_ms: limit.as_millis(),
            }),
            _ => Ok(()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
