use std::path::{Path, PathBuf};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use crate::{PerfChartsError, Result};

pub const LOCAL_CONFIG_NAME: &str = ".perf-charts.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration and the file it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    pub source: Option<PathBuf>,
}

pub trait ConfigLoader {
    /// Load from the first default location that exists.
    ///
    /// # Errors
    /// Returns an error if a found file cannot be read, parsed, or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load from an explicit path, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.perf-charts.toml` in the current directory
/// 2. `config.toml` in the platform config directory
///    (`~/.config/perf-charts` on Linux)
/// 3. `Config::default()`
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn read_config(&self, path: &Path) -> Result<LoadResult> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| PerfChartsError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let config = parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.read_config(&path);
            }
        }
        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        self.read_config(path)
    }
}

/// Parse and validate TOML configuration text.
///
/// # Errors
/// Returns `TomlParse` for malformed TOML or unknown keys, then any
/// [`Config::validate`] error.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
