//! Common test utilities

#![allow(dead_code)]

use prun::runner::Context;
use prun::ui::Verbosity;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a prun.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("prun.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a test config with an empty subdirectory next to it
pub fn create_test_config_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let (temp_dir, config_path) = create_test_config(content);
    let sub_dir = temp_dir.path().join("subdir");
    fs::create_dir(&sub_dir).unwrap();
    (temp_dir, config_path, sub_dir)
}

/// A context that runs in `dir` and prints nothing of its own
pub fn silent_context(dir: &TempDir) -> Context {
    Context::new()
        .with_working_dir(dir.path().to_path_buf())
        .with_verbosity(Verbosity::Silent)
}
