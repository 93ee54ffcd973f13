// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_PLAN_FILE;

/// Command-line arguments for `workplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "workplan",
    version,
    about = "Dependency-aware, working-day task scheduling for project plans.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Workplan.toml` in the current working directory.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_PLAN_FILE)]
    pub plan: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WORKPLAN_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Write the updated plan back to `--plan` after a mutating command.
    #[arg(long, global = true)]
    pub write: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate the plan and print a summary.
    Check,
    /// Print every task with its dates, state and predecessors.
    Schedule,
    /// Declare that SUCCESSOR may not start before PREDECESSOR completes.
    Depend {
        predecessor: String,
        successor: String,
    },
    /// Remove a declared dependency.
    Undepend {
        predecessor: String,
        successor: String,
    },
    /// Mark a task completed, reschedule its direct successors and
    /// re-evaluate its project.
    Complete { task: String },
    /// Clear a task's completed flag.
    Reopen { task: String },
    /// Delete a task and every dependency that mentions it.
    RemoveTask { task: String },
    /// Delete a project and all of its tasks.
    RemoveProject { project: String },
}

impl Command {
    /// Whether the command changes the plan (and so honours `--write`).
    pub fn mutates(&self) -> bool {
        !matches!(self, Command::Check | Command::Schedule)
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
