//! Core configuration types
//!
//! This module defines the data structures that represent a prun.yml task file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application usage description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Interpreter for string-form steps (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,

    /// Variables available as ${name} inside steps
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, String>,

    /// Tasks defined in the configuration
    #[serde(default, deserialize_with = "deserialize_unique_tasks")]
    pub tasks: BTreeMap<String, Task>,
}

/// A task definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Task {
    /// Usage description for the task listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Whether this task is hidden from the task listing
    #[serde(default)]
    pub private: bool,

    /// Keep running the remaining steps after a failure
    #[serde(rename = "continue-on-error", default)]
    pub continue_on_error: bool,

    /// Steps to execute, in order
    #[serde(default, deserialize_with = "deserialize_steps")]
    pub run: Vec<Step>,
}

/// A single step of a task
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Step {
    /// Command line run through the interpreter
    Shell(String),

    /// Program and arguments, spawned directly
    Argv(Vec<String>),

    /// Built-in: print a line to stdout
    Print { print: String },

    /// Built-in: recursively remove a directory, if present
    RemoveDir {
        #[serde(rename = "remove-dir")]
        remove_dir: String,
    },
}

/// Custom deserializer for the task table that rejects repeated task names
fn deserialize_unique_tasks<'de, D>(deserializer: D) -> Result<BTreeMap<String, Task>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, MapAccess, Visitor};
    use std::fmt;

    struct TasksVisitor;

    impl<'de> Visitor<'de> for TasksVisitor {
        type Value = BTreeMap<String, Task>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping of task names to tasks")
        }

        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut tasks = BTreeMap::new();
            while let Some((name, task)) = map.next_entry::<String, Task>()? {
                if tasks.contains_key(&name) {
                    return Err(A::Error::custom(format!(
                        "task '{}' is defined more than once",
                        name
                    )));
                }
                tasks.insert(name, task);
            }
            Ok(tasks)
        }
    }

    deserializer.deserialize_map(TasksVisitor)
}

/// Custom deserializer for steps that handles both single values and arrays
fn deserialize_steps<'de, D>(deserializer: D) -> Result<Vec<Step>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // Single string or built-in step
        Value::String(s) => Ok(vec![Step::Shell(s)]),
        Value::Mapping(_) => {
            let step = Step::deserialize(value).map_err(D::Error::custom)?;
            Ok(vec![step])
        }
        // Array of steps
        Value::Sequence(seq) => {
            let mut steps = Vec::new();
            for item in seq {
                let step = Step::deserialize(item).map_err(D::Error::custom)?;
                steps.push(step);
            }
            Ok(steps)
        }
        // Null or not present
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("run must be a string, object, or array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_config() {
        let yaml = r#"
tasks:
  hello:
    usage: Say hello
    run: echo "hello"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tasks.len(), 1);
        let task = config.tasks.get("hello").unwrap();
        assert_eq!(task.run, vec![Step::Shell("echo \"hello\"".to_string())]);
        assert!(!task.continue_on_error);
    }

    #[test]
    fn test_deserialize_step_forms() {
        let yaml = r#"
tasks:
  mixed:
    run:
      - [git, add, -A]
      - git status
      - print: done
      - remove-dir: __pycache__
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let task = config.tasks.get("mixed").unwrap();
        assert_eq!(
            task.run,
            vec![
                Step::Argv(vec!["git".into(), "add".into(), "-A".into()]),
                Step::Shell("git status".into()),
                Step::Print {
                    print: "done".into()
                },
                Step::RemoveDir {
                    remove_dir: "__pycache__".into()
                },
            ]
        );
    }

    #[test]
    fn test_deserialize_single_builtin_step() {
        let yaml = r#"
tasks:
  build:
    run:
      print: word
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let task = config.tasks.get("build").unwrap();
        assert_eq!(
            task.run,
            vec![Step::Print {
                print: "word".into()
            }]
        );
    }

    #[test]
    fn test_deserialize_rejects_numeric_run() {
        let yaml = r#"
tasks:
  bad:
    run: 42
"#;
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_flags_and_vars() {
        let yaml = r#"
vars:
  device: kitchen.yaml
tasks:
  lenient:
    private: true
    continue-on-error: true
    run: "true"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.vars.get("device").map(String::as_str), Some("kitchen.yaml"));
        let task = config.tasks.get("lenient").unwrap();
        assert!(task.private);
        assert!(task.continue_on_error);
    }
}
