//! Runtime task representation

use crate::config;
use crate::error::{ConfigError, ConfigResult};
use crate::runner::Command;
use std::collections::BTreeMap;

/// Runtime task representation
///
/// Unlike `config::Task`, every step has already been interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task name
    pub name: String,

    /// Usage description
    pub usage: Option<String>,

    /// Hidden from the task listing
    pub private: bool,

    /// Run every step even after a failure
    pub continue_on_error: bool,

    /// Steps, in execution order
    pub commands: Vec<Command>,
}

impl Task {
    /// Create a public, fail-fast task
    pub fn new(name: impl Into<String>, commands: Vec<Command>) -> Self {
        Task {
            name: name.into(),
            usage: None,
            private: false,
            continue_on_error: false,
            commands,
        }
    }

    /// Create a new task from configuration
    pub fn from_config(
        name: String,
        config: &config::Task,
        vars: &BTreeMap<String, String>,
    ) -> ConfigResult<Self> {
        config::validate_task_name(&name)?;

        let commands = config
            .run
            .iter()
            .map(|step| Command::from_config(step, vars))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::Interpolation {
                task: name.clone(),
                source,
            })?;

        for (index, command) in commands.iter().enumerate() {
            command
                .validate()
                .map_err(|error| ConfigError::InvalidStep {
                    task: name.clone(),
                    step: index + 1,
                    error,
                })?;
        }

        Ok(Task {
            name,
            usage: config.usage.clone(),
            private: config.private,
            continue_on_error: config.continue_on_error,
            commands,
        })
    }

    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }
}
