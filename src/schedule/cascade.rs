// src/schedule/cascade.rs

//! One-hop rescheduling of direct successors after a task completes.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::calendar;
use crate::dag::DependencyGraph;
use crate::errors::{Result, WorkplanError};
use crate::model::{Task, TaskId};

/// Date change applied to one successor during a cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rescheduled {
    pub task: TaskId,
    pub old_start: NaiveDate,
    pub old_end: NaiveDate,
    pub new_start: NaiveDate,
    pub new_end: NaiveDate,
}

impl Rescheduled {
    /// Whether the cascade actually moved the task.
    pub fn changed(&self) -> bool {
        self.old_start != self.new_start || self.old_end != self.new_end
    }
}

/// Slide every direct successor of `predecessor` found in `candidates` so it
/// starts the calendar day after `predecessor.end`.
///
/// Each successor keeps its working-day effort: the number of working days
/// in its old `[start, end]` window is laid out again from the new start.
/// Candidates that are not direct successors are left alone, completion
/// flags are never touched, and successors of successors are not visited.
///
/// All new windows are computed before any task is written, so an error
/// leaves `candidates` unchanged.
pub fn cascade_from(
    graph: &DependencyGraph,
    predecessor: &Task,
    candidates: &mut [Task],
) -> Result<Vec<Rescheduled>> {
    if !predecessor.completed {
        warn!(
            task = %predecessor.id,
            "cascade requested for a task that is not completed; ignoring"
        );
        return Ok(Vec::new());
    }

    let successors = graph.direct_successors(&predecessor.id);
    let new_start = predecessor
        .end
        .checked_add_days(Days::new(1))
        .ok_or(WorkplanError::DateOutOfRange(predecessor.end))?;

    // Decide first, then mutate.
    let mut plan = Vec::new();
    for (idx, task) in candidates.iter().enumerate() {
        if !successors.contains(&task.id) {
            debug!(
                task = %task.id,
                predecessor = %predecessor.id,
                "not a direct successor; skipping"
            );
            continue;
        }

        let effort = calendar::working_days_in_span(task.start, task.end);
        let new_end = calendar::end_of_span(new_start, effort)?;
        plan.push((
            idx,
            Rescheduled {
                task: task.id.clone(),
                old_start: task.start,
                old_end: task.end,
                new_start,
                new_end,
            },
        ));
    }

    let mut applied = Vec::with_capacity(plan.len());
    for (idx, change) in plan {
        let task = &mut candidates[idx];
        task.start = change.new_start;
        task.end = change.new_end;
        debug!(
            task = %change.task,
            predecessor = %predecessor.id,
            start = %change.new_start,
            end = %change.new_end,
            "rescheduled successor"
        );
        applied.push(change);
    }

    Ok(applied)
}
