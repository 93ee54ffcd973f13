// src/model.rs

//! Entities the scheduling core works on.
//!
//! These are plain in-memory records. Loading and saving them is the job of
//! a [`PlanStore`](crate::store::PlanStore); the core only ever sees
//! snapshots passed in explicitly.

use chrono::NaiveDate;

use crate::calendar;
use crate::errors::{Result, WorkplanError};

/// Canonical task identifier.
pub type TaskId = String;

/// Canonical project identifier.
pub type ProjectId = String;

/// A unit of work owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Owning project.
    pub project: ProjectId,
    pub name: String,
    pub start: NaiveDate,
    /// Always `>= start`.
    pub end: NaiveDate,
    pub completed: bool,
    /// Carried for callers; the scheduling core never looks at it.
    pub priority: i32,
}

impl Task {
    /// Create a task with an explicit date window.
    pub fn new(
        id: impl Into<TaskId>,
        project: impl Into<ProjectId>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        if end < start {
            return Err(WorkplanError::InvalidDateRange { start, end });
        }

        let id = id.into();
        Ok(Self {
            name: id.clone(),
            id,
            project: project.into(),
            start,
            end,
            completed: false,
            priority: 0,
        })
    }

    /// Create a task whose end date is `duration` working days after `start`.
    pub fn with_duration(
        id: impl Into<TaskId>,
        project: impl Into<ProjectId>,
        start: NaiveDate,
        duration: i64,
    ) -> Result<Self> {
        let end = calendar::compute_end_date(start, duration)?;
        Self::new(id, project, start, end)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// A directed "must finish before" relation between two tasks.
///
/// Edges reference tasks by id only and never own them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DependencyEdge {
    pub predecessor: TaskId,
    pub successor: TaskId,
}

impl DependencyEdge {
    pub fn new(predecessor: impl Into<TaskId>, successor: impl Into<TaskId>) -> Self {
        Self {
            predecessor: predecessor.into(),
            successor: successor.into(),
        }
    }
}

/// A container of tasks with a derived completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Set by [`crate::schedule::evaluate`] only; never cleared automatically.
    pub completed: bool,
    /// Ids of owned tasks, in insertion order.
    pub tasks: Vec<TaskId>,
}

impl Project {
    pub fn new(
        id: impl Into<ProjectId>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        if end < start {
            return Err(WorkplanError::InvalidDateRange { start, end });
        }

        let id = id.into();
        Ok(Self {
            name: id.clone(),
            id,
            start,
            end,
            completed: false,
            tasks: Vec::new(),
        })
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn owns(&self, task: &str) -> bool {
        self.tasks.iter().any(|t| t == task)
    }
}
