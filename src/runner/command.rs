//! Step execution
//!
//! A [`Command`] is one step of a task. An [`Executor`] decides what running
//! it means: [`ProcessExecutor`] spawns real processes, [`DryRunExecutor`]
//! only reports what would run.

use crate::config::Step;
use crate::error::{ExecutionError, ExecutionResult, InterpolationResult};
use crate::runner::{interpolate, interpolate_list, Context, ExitStatus};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

/// Runtime representation of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Program and arguments, spawned without a shell
    Exec(Vec<String>),

    /// Command line passed to the interpreter
    Shell(String),

    /// Line written to stdout
    Print(String),

    /// Directory removed recursively; a missing directory is not an error
    RemoveDir(PathBuf),
}

impl Command {
    /// Create from config, substituting `${var}` references
    pub fn from_config(step: &Step, vars: &BTreeMap<String, String>) -> InterpolationResult<Self> {
        Ok(match step {
            Step::Argv(argv) => Command::Exec(interpolate_list(argv, vars)?),
            Step::Shell(line) => Command::Shell(interpolate(line, vars)?),
            Step::Print { print } => Command::Print(interpolate(print, vars)?),
            Step::RemoveDir { remove_dir } => {
                Command::RemoveDir(PathBuf::from(interpolate(remove_dir, vars)?))
            }
        })
    }

    /// Convenience constructor for an argument list
    pub fn exec<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Command::Exec(argv.into_iter().map(Into::into).collect())
    }

    /// Human-readable form used in diagnostics
    pub fn display(&self) -> String {
        match self {
            Command::Exec(argv) => argv
                .iter()
                .map(|arg| quote_arg(arg))
                .collect::<Vec<_>>()
                .join(" "),
            Command::Shell(line) => line.clone(),
            Command::Print(text) => format!("print {}", quote_arg(text)),
            Command::RemoveDir(path) => format!("remove-dir {}", path.display()),
        }
    }

    /// Check the step once variables are substituted.
    ///
    /// A `RemoveDir` path must name something strictly below the working
    /// directory: relative, no `..`, and not empty or `.`.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Command::Exec(argv) if argv.first().map_or(true, |p| p.trim().is_empty()) => {
                Err("argument list must start with a program".to_string())
            }
            Command::Shell(line) if line.trim().is_empty() => {
                Err("empty command line".to_string())
            }
            Command::RemoveDir(path) if !is_below_working_dir(path) => Err(format!(
                "remove-dir path {:?} must name a directory inside the working directory",
                path.display().to_string()
            )),
            _ => Ok(()),
        }
    }
}

fn is_below_working_dir(path: &Path) -> bool {
    let mut named = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    named
}

fn quote_arg(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        format!("{:?}", arg)
    } else {
        arg.to_string()
    }
}

/// Capability to run a single step
pub trait Executor {
    /// Run `command` to completion and report its exit status.
    ///
    /// An `Err` means the step could not be carried out at all
    /// (program missing, I/O failure); a non-zero status is still `Ok`.
    fn execute(&self, command: &Command, ctx: &Context) -> ExecutionResult<ExitStatus>;
}

/// Runs steps for real: child processes inherit cwd and stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, command: &Command, ctx: &Context) -> ExecutionResult<ExitStatus> {
        ctx.printer.run(&command.display());

        match command {
            Command::Exec(argv) => {
                let (program, args) = argv.split_first().ok_or_else(|| ExecutionError::Spawn {
                    program: String::new(),
                    source: io::Error::new(io::ErrorKind::InvalidInput, "empty argument list"),
                })?;
                spawn(program, args, ctx)
            }
            Command::Shell(line) => {
                let (program, flags) = ctx.interpreter.split_first().ok_or_else(|| {
                    ExecutionError::Spawn {
                        program: line.clone(),
                        source: io::Error::new(io::ErrorKind::InvalidInput, "no interpreter"),
                    }
                })?;
                let mut args = flags.to_vec();
                args.push(line.clone());
                spawn(program, &args, ctx)
            }
            Command::Print(text) => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", text)
                    .and_then(|_| stdout.flush())
                    .map_err(|source| ExecutionError::Io {
                        action: "print to",
                        path: PathBuf::from("<stdout>"),
                        source,
                    })?;
                Ok(ExitStatus::SUCCESS)
            }
            Command::RemoveDir(path) => {
                let target = ctx.working_dir.join(path);
                if let Err(reason) = command.validate() {
                    return Err(ExecutionError::Io {
                        action: "remove",
                        path: target,
                        source: io::Error::new(io::ErrorKind::InvalidInput, reason),
                    });
                }
                match fs::remove_dir_all(&target) {
                    Ok(()) => Ok(ExitStatus::SUCCESS),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        ctx.printer
                            .debug(&format!("{} does not exist, nothing to remove", target.display()));
                        Ok(ExitStatus::SUCCESS)
                    }
                    Err(source) => Err(ExecutionError::Io {
                        action: "remove",
                        path: target,
                        source,
                    }),
                }
            }
        }
    }
}

fn spawn(program: &str, args: &[String], ctx: &Context) -> ExecutionResult<ExitStatus> {
    let status = StdCommand::new(program)
        .args(args)
        .current_dir(&ctx.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ExecutionError::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(ExitStatus::from(status))
}

/// Reports each step without running it
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunExecutor;

impl Executor for DryRunExecutor {
    fn execute(&self, command: &Command, ctx: &Context) -> ExecutionResult<ExitStatus> {
        ctx.printer.dry(&command.display());
        Ok(ExitStatus::SUCCESS)
    }
}
