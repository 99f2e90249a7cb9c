//! Task file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, PrunError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default task file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["prun.yml", "prun.yaml"];

/// Task file used when no prun.yml is found
pub const BUILTIN_CONFIG: &str = include_str!("builtin.yml");

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A task file on disk
    File(PathBuf),
    /// The embedded default task file
    Builtin,
}

/// Find the task file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Parse a task file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, PrunError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, PrunError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Parse the embedded default task file
pub fn parse_builtin_config() -> Result<Config, PrunError> {
    parse_config(BUILTIN_CONFIG)
}

/// Load the task file, searching upward from `start_dir` and falling back to
/// the built-in tasks when none exists
pub fn load_config_from(start_dir: PathBuf) -> Result<(Config, ConfigSource), PrunError> {
    match find_config_file_from(start_dir) {
        Ok(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, ConfigSource::File(path)))
        }
        Err(ConfigError::NotFound(_)) => Ok((parse_builtin_config()?, ConfigSource::Builtin)),
        Err(e) => Err(e.into()),
    }
}

/// Parse configuration with automatic file discovery
pub fn load_config_auto() -> Result<(Config, ConfigSource), PrunError> {
    let cwd = env::current_dir()?;
    load_config_from(cwd)
}
