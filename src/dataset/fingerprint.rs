use std::fmt;

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use super::DataPoint;

/// SHA-256 digest over suite names and their ordered values.
///
/// Two datasets with the same suites, iteration order and values hash equal
/// regardless of where they were loaded from. Keys inside a point are hashed
/// in sorted order, so JSON key order does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(super) fn of_suites(suites: &IndexMap<String, Vec<DataPoint>>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((suites.len() as u64).to_le_bytes());

        for (name, points) in suites {
            // Length prefixes keep ("ab","c") distinct from ("a","bc").
            hasher.update((name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
            hasher.update((points.len() as u64).to_le_bytes());

            for point in points {
                let mut entries: Vec<(&str, f64)> = point.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                hasher.update((entries.len() as u64).to_le_bytes());
                for (key, value) in entries {
                    hasher.update((key.len() as u64).to_le_bytes());
                    hasher.update(key.as_bytes());
                    hasher.update(value.to_bits().to_le_bytes());
                }
            }
        }

        Self(format!("{:x}", hasher.finalize()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex digits, for log lines.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod tests;
