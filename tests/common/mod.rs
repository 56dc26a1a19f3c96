#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the perf-charts binary.
#[macro_export]
macro_rules! perf_charts {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("perf-charts"))
    };
}

/// Two suites, three metrics, uneven iteration counts.
pub const SAMPLE_DATASET: &str = r#"{
    "baseline": [
        {"averageDuration": 120.5, "throughput": 830, "peakMemoryUsage": 512},
        {"averageDuration": 118.0, "throughput": 845, "peakMemoryUsage": 520},
        {"averageDuration": 121.2, "throughput": 826, "peakMemoryUsage": 515}
    ],
    "optimized": [
        {"averageDuration": 95.1, "throughput": 1040, "peakMemoryUsage": 480},
        {"averageDuration": 97.3, "throughput": 1025, "peakMemoryUsage": 478}
    ]
}"#;

/// The worked example: suiteA {10, 12}, suiteB {8}.
pub const TWO_SUITES: &str = r#"{"suiteA":[{"x":10},{"x":12}],"suiteB":[{"x":8}]}"#;

/// Suite "b" changes its key set at the second point.
pub const MISMATCHED_KEYS: &str = r#"{"a":[{"x":1,"y":2}],"b":[{"x":1,"y":2},{"x":3}]}"#;

/// Temporary directory with dataset and config fixtures.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_dataset(&self, content: &str) -> PathBuf {
        self.create_file("results.json", content)
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".perf-charts.toml", content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Sorted file names directly inside `relative_dir`.
    pub fn list(&self, relative_dir: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path().join(relative_dir))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
