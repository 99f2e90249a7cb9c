//! Configuration validation
//!
//! This module provides validation logic for task files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if let Some(interpreter) = &config.interpreter {
        if interpreter.first().map_or(true, |program| program.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "interpreter must name a program".to_string(),
            ));
        }
    }

    for name in config.tasks.keys() {
        validate_task_name(name)?;
    }

    Ok(())
}

/// Task names are used as a CLI argument, so they must look like one.
///
/// Steps are checked after interpolation, in `runner::Task::from_config`.
pub fn validate_task_name(name: &str) -> ConfigResult<()> {
    if name.is_empty() || name.starts_with('-') || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidTaskName(name.to_string()));
    }
    Ok(())
}
