//! Task file parsing and validation
//!
//! This module handles discovery and parsing of prun.yml task files,
//! the embedded default tasks, and validation of configuration structure.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
