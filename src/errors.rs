// src/errors.rs

//! Crate-wide error type and result alias.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{ProjectId, TaskId};

#[derive(Error, Debug)]
pub enum WorkplanError {
    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(TaskId),

    #[error("cyclic dependency: '{successor}' already leads back to '{predecessor}'")]
    CyclicDependency {
        predecessor: TaskId,
        successor: TaskId,
    },

    #[error("dependency '{predecessor}' -> '{successor}' not found")]
    EdgeNotFound {
        predecessor: TaskId,
        successor: TaskId,
    },

    #[error("invalid duration: {0} (must be >= 0 working days)")]
    InvalidDuration(i64),

    #[error("date out of range after {0}")]
    DateOutOfRange(NaiveDate),

    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("task '{0}' already exists")]
    DuplicateTask(TaskId),

    #[error("project '{0}' already exists")]
    DuplicateProject(ProjectId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cycle detected in plan: {0}")]
    DagCycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, WorkplanError>;
