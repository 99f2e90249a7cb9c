//! The task registry
//!
//! Built once at startup from the task file and read-only afterwards. The
//! runner receives it by reference, so tests can hand it any registry.

use crate::config::{self, Config};
use crate::error::{ConfigError, ConfigResult};
use crate::runner::Task;
use std::collections::BTreeMap;

/// Immutable mapping from task name to task
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, Task>,
}

impl TaskRegistry {
    /// Build from already-constructed tasks; names must be unique
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> ConfigResult<Self> {
        let mut map = BTreeMap::new();
        for task in tasks {
            if map.contains_key(&task.name) {
                return Err(ConfigError::DuplicateTask(task.name));
            }
            map.insert(task.name.clone(), task);
        }
        Ok(TaskRegistry { tasks: map })
    }

    /// Build from a parsed task file.
    ///
    /// `overrides` are layered over the file's `vars` before interpolation.
    pub fn from_config(config: &Config, overrides: &BTreeMap<String, String>) -> ConfigResult<Self> {
        config::validate_config(config)?;

        let mut vars = config.vars.clone();
        vars.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));

        let tasks = config
            .tasks
            .iter()
            .map(|(name, task)| Task::from_config(name.clone(), task, &vars))
            .collect::<ConfigResult<Vec<_>>>()?;

        Self::from_tasks(tasks)
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// All task names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Tasks shown in the listing
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values().filter(|task| !task.private)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
