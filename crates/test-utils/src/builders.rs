#![allow(dead_code)]

use std::collections::BTreeMap;

use workplan::config::{ConfigSection, PlanFile, ProjectConfig, RawPlanFile, TaskConfig};

use crate::date;

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile {
                config: ConfigSection::default(),
                project: BTreeMap::new(),
                task: BTreeMap::new(),
            },
        }
    }

    /// Add a project spanning `start..=end` (`YYYY-MM-DD`).
    pub fn with_project(mut self, id: &str, start: &str, end: &str) -> Self {
        self.plan.project.insert(
            id.to_string(),
            ProjectConfig {
                name: None,
                start: date(start),
                end: date(end),
                completed: false,
            },
        );
        self
    }

    pub fn with_task(mut self, id: &str, task: TaskConfig) -> Self {
        self.plan.task.insert(id.to_string(), task);
        self
    }

    pub fn with_default_duration(mut self, days: i64) -> Self {
        self.plan.config.default_duration = days;
        self
    }

    /// The unvalidated plan, for tests that expect validation to fail.
    pub fn raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(project: &str, start: &str) -> Self {
        Self {
            task: TaskConfig {
                project: project.to_string(),
                name: None,
                start: date(start),
                end: None,
                duration: None,
                completed: false,
                priority: 0,
                after: vec![],
            },
        }
    }

    pub fn end(mut self, end: &str) -> Self {
        self.task.end = Some(date(end));
        self
    }

    pub fn duration(mut self, working_days: i64) -> Self {
        self.task.duration = Some(working_days);
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn completed(mut self, val: bool) -> Self {
        self.task.completed = val;
        self
    }

    pub fn priority(mut self, val: i32) -> Self {
        self.task.priority = val;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.task.name = Some(name.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}
