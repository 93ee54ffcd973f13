// src/lib.rs

pub mod calendar;
pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod model;
pub mod report;
pub mod schedule;
pub mod store;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{load_and_validate, save_to_path, PlanFile};
use crate::engine::Planner;
use crate::store::PlanStore;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading and validation
/// - the in-memory planner
/// - the requested command
/// - (optional) writing the plan back with `--write`
pub fn run(args: CliArgs) -> Result<()> {
    let plan_path = PathBuf::from(&args.plan);
    let plan = load_and_validate(&plan_path)?;
    let mut planner = plan.into_planner()?;

    let output = execute(&mut planner, &args.command)?;
    print!("{output}");

    if args.command.mutates() {
        if args.write {
            let updated = PlanFile::from_planner(&planner);
            save_to_path(&updated, &plan_path)?;
            info!(path = %plan_path.display(), "plan updated");
        } else {
            debug!("plan changes not written (pass --write to persist)");
        }
    }

    Ok(())
}

/// Run a single CLI command against a planner and return the text to print.
pub fn execute<S: PlanStore>(planner: &mut Planner<S>, command: &Command) -> Result<String> {
    let out = match command {
        Command::Check => report::render_summary(planner),
        Command::Schedule => report::render_schedule(planner),
        Command::Depend {
            predecessor,
            successor,
        } => {
            planner.declare_dependency(predecessor, successor)?;
            format!("{predecessor} -> {successor} declared\n")
        }
        Command::Undepend {
            predecessor,
            successor,
        } => {
            planner.remove_dependency(predecessor, successor)?;
            format!("{predecessor} -> {successor} removed\n")
        }
        Command::Complete { task } => {
            let completion = planner.complete_task(task)?;
            report::render_completion(&completion)
        }
        Command::Reopen { task } => {
            let task = planner.reopen_task(task)?;
            format!("reopened {}\n", task.id)
        }
        Command::RemoveTask { task } => {
            let task = planner.remove_task(task)?;
            format!("removed task {}\n", task.id)
        }
        Command::RemoveProject { project } => {
            let project = planner.remove_project(project)?;
            format!(
                "removed project {} ({} tasks)\n",
                project.id,
                project.tasks.len()
            )
        }
    };

    Ok(out)
}
