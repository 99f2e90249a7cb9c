//! Task sequencing
//!
//! Resolves a task by name and feeds its steps, one at a time and in
//! declaration order, to an [`Executor`].

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::{Context, Executor, TaskRegistry};

/// Runs tasks from a registry through an executor
pub struct Runner<'a, E: Executor> {
    registry: &'a TaskRegistry,
    executor: E,
}

impl<'a, E: Executor> Runner<'a, E> {
    pub fn new(registry: &'a TaskRegistry, executor: E) -> Self {
        Runner { registry, executor }
    }

    #[cfg(test)]
    fn executor(&self) -> &E {
        &self.executor
    }

    /// Run the named task.
    ///
    /// Stops at the first step that does not exit 0 and returns
    /// `CommandFailed` with that step's status. Tasks marked
    /// `continue_on_error` run every step and report the first failure.
    pub fn run(&self, name: &str, ctx: &Context) -> ExecutionResult<()> {
        let task = self
            .registry
            .get(name)
            .ok_or_else(|| ExecutionError::UnknownTask(name.to_string()))?;

        ctx.printer.info(&format!("Running task: {}", task.name));

        let mut first_failure = None;

        for (index, command) in task.commands.iter().enumerate() {
            let step = index + 1;
            let error = match self.executor.execute(command, ctx) {
                Ok(status) if status.success() => continue,
                Ok(status) => ExecutionError::CommandFailed {
                    task: task.name.clone(),
                    step,
                    status,
                },
                Err(e) => e,
            };

            if !task.continue_on_error {
                return Err(error);
            }

            ctx.printer.error(&format!("{} (continuing)", error));
            first_failure.get_or_insert(error);
        }

        match first_failure {
            Some(error) => Err(error),
            None => {
                ctx.printer.debug(&format!("Task completed: {}", task.name));
                Ok(())
            }
        }
    }
}
