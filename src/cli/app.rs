//! Main CLI application

use crate::config::{load_config_auto, parse_config_file, Config, ConfigSource};
use crate::error::{ConfigError, PrunError};
use crate::runner::{Context, DryRunExecutor, ProcessExecutor, Runner, TaskRegistry};
use crate::ui::{Printer, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use colored::Colorize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed command line
    matches: ArgMatches,
}

impl App {
    /// Parse arguments, exiting with a usage message on error
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_from_args(args).unwrap_or_else(|e| e.exit())
    }

    /// Parse arguments
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = build_command();
        let matches = command.clone().try_get_matches_from(args)?;
        Ok(App { command, matches })
    }

    pub fn verbosity(&self) -> Verbosity {
        get_verbosity(&self.matches)
    }

    /// Run the application
    pub fn run(mut self) -> Result<(), PrunError> {
        if let Some(shell) = self.matches.get_one::<Shell>("completions").copied() {
            let name = self.command.get_name().to_string();
            clap_complete::generate(shell, &mut self.command, name, &mut io::stdout());
            return Ok(());
        }

        let verbosity = self.verbosity();
        let printer = Printer::new(verbosity);

        let (config, source) = match self.matches.get_one::<PathBuf>("file") {
            Some(path) => (parse_config_file(path)?, ConfigSource::File(path.clone())),
            None => load_config_auto()?,
        };
        match &source {
            ConfigSource::File(path) => printer.debug(&format!("Using {}", path.display())),
            ConfigSource::Builtin => printer.debug("No prun.yml found, using built-in tasks"),
        }

        let overrides = parse_var_overrides(
            self.matches
                .get_many::<String>("var")
                .into_iter()
                .flatten()
                .map(String::as_str),
        )?;

        // Built once, read-only from here on
        let registry = TaskRegistry::from_config(&config, &overrides)?;

        // clap requires TASK unless --list or --completions is given
        let task_name = match self.matches.get_one::<String>("task") {
            Some(name) if !self.matches.get_flag("list") => name,
            _ => {
                print_task_list(&config, &registry);
                return Ok(());
            }
        };

        let mut ctx = Context::new().with_verbosity(verbosity);
        if let Some(interpreter) = &config.interpreter {
            ctx = ctx.with_interpreter(interpreter.clone());
        }

        if self.matches.get_flag("dry-run") {
            Runner::new(&registry, DryRunExecutor).run(task_name, &ctx)?;
        } else {
            Runner::new(&registry, ProcessExecutor).run(task_name, &ctx)?;
        }

        Ok(())
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("prun")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run named project tasks: fixed, ordered command sequences")
        .arg(
            Arg::new("task")
                .value_name("TASK")
                .help("Name of the task to run")
                .required_unless_present_any(["list", "completions"]),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a prun.yml task file"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List available tasks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the steps of TASK without running them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("var")
                .long("var")
                .value_name("KEY=VALUE")
                .help("Set a task variable (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Print shell completions and exit"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output of our own")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Parse `KEY=VALUE` assignments from the command line
fn parse_var_overrides<'a>(
    assignments: impl Iterator<Item = &'a str>,
) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut vars = BTreeMap::new();
    for assignment in assignments {
        match assignment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                vars.insert(key.trim().to_string(), value.to_string());
            }
            _ => return Err(ConfigError::InvalidVar(assignment.to_string())),
        }
    }
    Ok(vars)
}

fn print_task_list(config: &Config, registry: &TaskRegistry) {
    if let Some(usage) = config.usage.as_deref().or(config.name.as_deref()) {
        println!("{}", usage);
    }
    println!("Tasks:");

    let width = registry.visible().map(|t| t.name.len()).max().unwrap_or(0);
    for task in registry.visible() {
        let usage = task.usage.as_deref().unwrap_or("");
        let name = format!("{:<width$}", task.name, width = width);
        println!("  {}  {}", name.bold(), usage);
    }
}

/// Run the CLI with the process arguments and return the exit code
pub fn run() -> i32 {
    let app = App::from_args(std::env::args_os());
    let printer = Printer::new(app.verbosity());

    match app.run() {
        Ok(()) => 0,
        Err(e) => {
            printer.error(&e.to_string());
            e.exit_code()
        }
    }
}
