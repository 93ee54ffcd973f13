// src/schedule/completion.rs

//! Derive a project's completion flag from its tasks.

use tracing::{info, warn};

use crate::model::{Project, Task};

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Every owned task is completed; the project flag is now set.
    MarkedComplete,
    /// At least one owned task is open, or the project owns no tasks.
    NotYetComplete,
}

/// Mark `project` completed if it owns at least one task and all of its
/// tasks are completed.
///
/// The flag is only ever set here, never cleared: reopening a task after
/// the project completed reports `NotYetComplete` but leaves
/// `project.completed` as it was. Tasks belonging to another project are
/// ignored.
pub fn evaluate(project: &mut Project, tasks: &[Task]) -> Completion {
    let mut owned = 0usize;
    let mut open = 0usize;

    for task in tasks {
        if task.project != project.id {
            warn!(
                project = %project.id,
                task = %task.id,
                owner = %task.project,
                "task belongs to another project; ignoring"
            );
            continue;
        }
        owned += 1;
        if !task.completed {
            open += 1;
        }
    }

    if owned == 0 || open > 0 {
        return Completion::NotYetComplete;
    }

    if !project.completed {
        info!(
            project = %project.id,
            tasks = owned,
            "all tasks completed; marking project complete"
        );
    }
    project.completed = true;
    Completion::MarkedComplete
}
