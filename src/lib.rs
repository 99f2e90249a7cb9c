//! prun - a tiny project task runner
//!
//! A task is a named, ordered list of steps. `prun <task>` runs the steps one
//! after another and stops at the first one that fails, exiting with its
//! status. Tasks come from a `prun.yml` file or, when there is none, from a
//! built-in set (`push`, `build`, `reload`, `clean`).

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{PrunError, Result};

/// Current version of prun
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
