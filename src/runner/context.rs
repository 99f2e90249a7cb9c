//! Execution context for task running
//!
//! The context carries what every step shares: the working directory,
//! the interpreter for command lines, and output settings.

use crate::ui::{Printer, Verbosity};
use std::env;
use std::path::PathBuf;

/// Execution context shared by all steps of a task
pub struct Context {
    /// Working directory every step runs in
    pub working_dir: PathBuf,

    /// Interpreter for command-line steps (e.g., ["bash", "-c"])
    pub interpreter: Vec<String>,

    /// Diagnostic output
    pub printer: Printer,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            interpreter: default_interpreter(),
            printer: Printer::default(),
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.printer = Printer::new(verbosity);
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(windows)]
fn default_interpreter() -> Vec<String> {
    vec!["cmd".to_string(), "/C".to_string()]
}

#[cfg(not(windows))]
fn default_interpreter() -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string()]
}
