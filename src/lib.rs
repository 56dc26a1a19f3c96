pub mod algorithms;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod orchestrator;
pub mod render;
pub mod report;
pub mod stats;

pub use error::{PerfChartsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHART_FAILURES: i32 = 1;
pub const EXIT_INPUT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
