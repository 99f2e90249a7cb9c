//! Task execution engine
//!
//! This module turns task-file definitions into an immutable registry and
//! runs a task's steps in order, stopping at the first failure.

pub mod command;
pub mod context;
pub mod interpolate;
pub mod registry;
pub mod run;
pub mod status;
pub mod task;

// Re-export main types
pub use command::*;
pub use context::*;
pub use interpolate::*;
pub use registry::*;
pub use run::*;
pub use status::*;
pub use task::*;
