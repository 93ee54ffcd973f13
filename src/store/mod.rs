// src/store/mod.rs

//! Persistence boundary for the planner.
//!
//! The scheduling core holds no durable state of its own. A [`PlanStore`]
//! hands out snapshots of tasks and projects by id and accepts the mutated
//! records back once an operation has finished.

use std::fmt::Debug;

use crate::errors::Result;
use crate::model::{Project, Task};

pub mod memory;

pub use memory::MemoryStore;

/// Abstract task/project repository.
pub trait PlanStore: Send + Debug {
    fn task(&self, id: &str) -> Option<Task>;
    fn project(&self, id: &str) -> Option<Project>;

    /// All tasks, in a stable order.
    fn tasks(&self) -> Vec<Task>;
    /// All projects, in a stable order.
    fn projects(&self) -> Vec<Project>;

    /// Tasks whose owning project is `project`.
    fn tasks_in_project(&self, project: &str) -> Vec<Task> {
        self.tasks()
            .into_iter()
            .filter(|t| t.project == project)
            .collect()
    }

    /// Insert or replace a task.
    fn save_task(&mut self, task: Task) -> Result<()>;
    /// Insert or replace a project.
    fn save_project(&mut self, project: Project) -> Result<()>;

    fn remove_task(&mut self, id: &str) -> Result<Option<Task>>;
    fn remove_project(&mut self, id: &str) -> Result<Option<Project>>;
}
