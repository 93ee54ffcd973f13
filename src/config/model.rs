// src/config/model.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Plan file exactly as read from TOML, before any semantic checks.
///
/// ```toml
/// [config]
/// default_duration = 1
///
/// [project.site]
/// name = "Site relaunch"
/// start = "2024-06-10"
/// end = "2024-06-28"
///
/// [task.design]
/// project = "site"
/// start = "2024-06-10"
/// duration = 4
///
/// [task.build]
/// project = "site"
/// start = "2024-06-17"
/// end = "2024-06-21"
/// after = ["design"]
/// ```
///
/// Dates are quoted `YYYY-MM-DD` strings. All sections are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPlanFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// Keys are project ids.
    #[serde(default)]
    pub project: BTreeMap<String, ProjectConfig>,

    /// Keys are task ids.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// A plan file that passed validation.
///
/// Only obtainable through `PlanFile::try_from(RawPlanFile)`, so every
/// `PlanFile` references existing projects and tasks and has an acyclic
/// dependency set.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub config: ConfigSection,
    pub project: BTreeMap<String, ProjectConfig>,
    pub task: BTreeMap<String, TaskConfig>,
}

impl PlanFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        project: BTreeMap<String, ProjectConfig>,
        task: BTreeMap<String, TaskConfig>,
    ) -> Self {
        Self {
            config,
            project,
            task,
        }
    }

    pub fn into_raw(self) -> RawPlanFile {
        RawPlanFile {
            config: self.config,
            project: self.project,
            task: self.task,
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSection {
    /// Working days given to a task that sets neither `end` nor `duration`.
    #[serde(default)]
    pub default_duration: i64,
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            default_duration: 0,
        }
    }
}

/// `[project.<id>]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Display name; defaults to the project id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub start: NaiveDate,
    pub end: NaiveDate,

    #[serde(default)]
    pub completed: bool,
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Owning project id.
    pub project: String,

    /// Display name; defaults to the task id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub start: NaiveDate,

    /// Explicit end date. Ignored when `duration` is also given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,

    /// Length in working days, counted from the day after `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub priority: i32,

    /// Predecessors: tasks that must complete before this one may start.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub after: Vec<String>,
}
