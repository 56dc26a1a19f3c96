//! Config file discovery: explicit path, current dir, user config, fallback.

use std::path::{Path, PathBuf};

use crate::PerfChartsError;
use crate::chart::Theme;
use crate::config::{Config, ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.perf-charts.toml", "[batch]\nworkers = 2\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.batch.workers, 2);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/my/project/.perf-charts.toml"))
    );
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/perf-charts/config.toml",
        "[style]\ntheme = \"ggplot\"\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.style.theme, Theme::Ggplot);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.perf-charts.toml", "[style]\ndark_mode = true\n")
        .with_file(
            "/home/user/.config/perf-charts/config.toml",
            "[style]\ntheme = \"minimal\"\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap().config;

    assert!(config.style.dark_mode);
    assert_eq!(config.style.theme, Theme::Default);
}

#[test]
fn missing_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.source.is_none());
}

#[test]
fn explicit_path_must_exist() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/custom.toml"))
        .unwrap_err();

    assert!(matches!(err, PerfChartsError::FileRead { ref path, .. } if path == Path::new("/nowhere/custom.toml")));
}

#[test]
fn explicit_path_skips_discovery() {
    let fs = MockFileSystem::new()
        .with_file("/project/.perf-charts.toml", "[batch]\nworkers = 2\n")
        .with_file("/etc/custom.toml", "[batch]\nworkers = 16\n");

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/custom.toml"))
        .unwrap();

    assert_eq!(result.config.batch.workers, 16);
}

#[test]
fn invalid_local_config_is_reported() {
    let fs = MockFileSystem::new().with_file("/project/.perf-charts.toml", "[batch\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, PerfChartsError::TomlParse(_)));
}
