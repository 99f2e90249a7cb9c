//! Error types for prun

use crate::runner::ExitStatus;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for prun operations
pub type Result<T> = std::result::Result<T, PrunError>;

/// Main error type for prun
#[derive(Error, Debug)]
pub enum PrunError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task execution errors
    #[error("{0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PrunError {
    /// Process exit code this error should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            PrunError::Execution(e) => e.exit_code(),
            _ => 1,
        }
    }
}

/// Task file parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find task file (searched: {0})")]
    NotFound(String),

    #[error("Failed to read task file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Task '{task}' step {step}: {error}")]
    InvalidStep {
        task: String,
        step: usize,
        error: String,
    },

    #[error("Invalid task name '{0}'")]
    InvalidTaskName(String),

    #[error("Task '{0}' is defined more than once")]
    DuplicateTask(String),

    #[error("Invalid variable assignment '{0}' (expected KEY=VALUE)")]
    InvalidVar(String),

    #[error("Task '{task}': {source}")]
    Interpolation {
        task: String,
        #[source]
        source: InterpolationError,
    },
}

/// Task execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Task '{0}' is not defined")]
    UnknownTask(String),

    #[error("Task '{task}' failed at step {step} with exit code {status}")]
    CommandFailed {
        task: String,
        step: usize,
        status: ExitStatus,
    },

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{action} '{path}' failed: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExecutionError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecutionError::UnknownTask(_) => 2,
            ExecutionError::CommandFailed { status, .. } => status.code(),
            ExecutionError::Spawn { .. } => 127,
            ExecutionError::Io { .. } => 1,
        }
    }
}

/// Variable interpolation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),

    #[error("Invalid interpolation syntax: {0}")]
    InvalidSyntax(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;
