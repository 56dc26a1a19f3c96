use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Completed/total counter for a chart batch, mirrored to a progress bar.
///
/// The bar is hidden in quiet mode or when stderr is not a TTY; the counter
/// works either way.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    progress_bar: ProgressBar,
    completed: Arc<AtomicU64>,
    total: u64,
}

impl BatchProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    /// Counter only, never drawn.
    #[must_use]
    pub fn hidden(total: u64) -> Self {
        Self::new_with_visibility(total, true, false)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self {
            progress_bar,
            completed: Arc::new(AtomicU64::new(0)),
            total,
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Rendering [{bar:40.cyan/blue}] {pos}/{len} charts ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    /// Record one finished job and return the new completed count.
    ///
    /// Thread-safe for use with rayon parallel iterators.
    pub fn inc(&self) -> u64 {
        let count = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
        count
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
