// src/engine/mod.rs

//! Unit-of-work layer around the scheduling core.
//!
//! The [`Planner`] owns the dependency graph and a [`PlanStore`]. Each of
//! its operations loads the entities it needs, runs the pure core
//! functions from [`crate::calendar`], [`crate::dag`] and
//! [`crate::schedule`], and writes the results back only once every check
//! has passed.
//!
//! [`PlanStore`]: crate::store::PlanStore

use chrono::NaiveDate;

use crate::model::{ProjectId, TaskId};
use crate::schedule::{Completion, Rescheduled};

pub mod planner;

pub use planner::Planner;

/// Options that shape how the planner fills in missing data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerOptions {
    /// Working days given to a new task that specifies neither an end date
    /// nor a duration.
    pub default_duration: i64,
}

/// Input for [`Planner::add_task`].
///
/// If `duration` is set it wins over `end`; with neither, the planner's
/// `default_duration` is used.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub id: TaskId,
    pub project: ProjectId,
    pub name: Option<String>,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub duration: Option<i64>,
    pub priority: i32,
    pub completed: bool,
}

impl NewTask {
    pub fn new(id: impl Into<TaskId>, project: impl Into<ProjectId>, start: NaiveDate) -> Self {
        Self {
            id: id.into(),
            project: project.into(),
            name: None,
            start,
            end: None,
            duration: None,
            priority: 0,
            completed: false,
        }
    }

    pub fn duration(mut self, working_days: i64) -> Self {
        self.duration = Some(working_days);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }
}

/// What happened when a task was completed (or re-synced).
#[derive(Debug, Clone)]
pub struct CompletionReport {
    pub task: TaskId,
    /// `false` if the task was already completed before this call.
    pub newly_completed: bool,
    /// One entry per direct successor the cascade visited.
    pub rescheduled: Vec<Rescheduled>,
    pub project: ProjectId,
    pub completion: Completion,
}
