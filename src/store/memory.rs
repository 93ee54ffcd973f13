// src/store/memory.rs

use std::collections::BTreeMap;

use super::PlanStore;
use crate::errors::Result;
use crate::model::{Project, ProjectId, Task, TaskId};

/// In-memory [`PlanStore`] keyed by id.
///
/// Used by the CLI (backed by a plan file) and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: BTreeMap<TaskId, Task>,
    projects: BTreeMap<ProjectId, Project>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl PlanStore for MemoryStore {
    fn task(&self, id: &str) -> Option<Task> {
        self.tasks.get(id).cloned()
    }

    fn project(&self, id: &str) -> Option<Project> {
        self.projects.get(id).cloned()
    }

    fn tasks(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    fn projects(&self) -> Vec<Project> {
        self.projects.values().cloned().collect()
    }

    fn tasks_in_project(&self, project: &str) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|t| t.project == project)
            .cloned()
            .collect()
    }

    fn save_task(&mut self, task: Task) -> Result<()> {
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    fn save_project(&mut self, project: Project) -> Result<()> {
        self.projects.insert(project.id.clone(), project);
        Ok(())
    }

    fn remove_task(&mut self, id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.remove(id))
    }

    fn remove_project(&mut self, id: &str) -> Result<Option<Project>> {
        Ok(self.projects.remove(id))
    }
}
