//! Bounded-concurrency execution of chart jobs.

mod cancel;
mod executor;
mod outcome;
mod progress;

pub use cancel::CancellationToken;
pub use executor::{BatchConfig, DEFAULT_JOB_TIMEOUT, DEFAULT_WORKERS, Orchestrator};
pub use outcome::{BatchOutcome, JobFailure, JobSuccess};
pub use progress::BatchProgress;
