//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, the task listing,
//! shell completion, and mapping results to an exit code.

pub mod app;

// Re-export main types
pub use app::*;
