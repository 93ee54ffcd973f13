// src/engine/planner.rs

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::calendar;
use crate::dag::DependencyGraph;
use crate::engine::{CompletionReport, NewTask, PlannerOptions};
use crate::errors::{Result, WorkplanError};
use crate::model::{Project, Task};
use crate::schedule::{cascade_from, evaluate};
use crate::store::PlanStore;

/// Dependency graph plus entity store, driven one operation at a time.
///
/// Mutating operations take `&mut self`, so the read-check-insert sequence
/// of a dependency declaration can never interleave with another writer.
/// Callers sharing a planner across threads wrap it in a lock.
#[derive(Debug)]
pub struct Planner<S: PlanStore> {
    store: S,
    graph: DependencyGraph,
    options: PlannerOptions,
}

impl<S: PlanStore> Planner<S> {
    pub fn new(store: S, graph: DependencyGraph, options: PlannerOptions) -> Self {
        Self {
            store,
            graph,
            options,
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> PlannerOptions {
        self.options
    }

    pub fn into_parts(self) -> (S, DependencyGraph, PlannerOptions) {
        (self.store, self.graph, self.options)
    }

    /// Register a new, empty project. Tasks join it through [`Self::add_task`].
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        if self.store.project(&project.id).is_some() {
            return Err(WorkplanError::DuplicateProject(project.id));
        }
        if !project.tasks.is_empty() {
            return Err(WorkplanError::ConfigError(format!(
                "project '{}' must be registered without tasks",
                project.id
            )));
        }
        debug!(project = %project.id, "adding project");
        self.store.save_project(project)
    }

    /// Create a task under an existing project, deriving its end date from
    /// the calendar.
    pub fn add_task(&mut self, new: NewTask) -> Result<Task> {
        if self.store.task(&new.id).is_some() {
            return Err(WorkplanError::DuplicateTask(new.id));
        }
        let mut project = self
            .store
            .project(&new.project)
            .ok_or_else(|| WorkplanError::ProjectNotFound(new.project.clone()))?;

        let task = match (new.duration, new.end) {
            (Some(duration), _) => Task::with_duration(&new.id, &new.project, new.start, duration)?,
            (None, Some(end)) => Task::new(&new.id, &new.project, new.start, end)?,
            (None, None) => Task::with_duration(
                &new.id,
                &new.project,
                new.start,
                self.options.default_duration,
            )?,
        };
        let task = match new.name {
            Some(name) => task.named(name),
            None => task,
        }
        .with_priority(new.priority)
        .completed(new.completed);

        debug!(
            task = %task.id,
            project = %project.id,
            start = %task.start,
            end = %task.end,
            "adding task"
        );

        if !project.owns(&task.id) {
            project.tasks.push(task.id.clone());
        }
        self.store.save_task(task.clone())?;
        self.store.save_project(project)?;
        Ok(task)
    }

    /// Move a task to a new start date and recompute its end from a
    /// working-day duration.
    pub fn reschedule_task(&mut self, id: &str, start: NaiveDate, duration: i64) -> Result<Task> {
        let mut task = self.load_task(id)?;
        let end = calendar::compute_end_date(start, duration)?;

        task.start = start;
        task.end = end;
        debug!(task = %task.id, %start, %end, "rescheduled task");
        self.store.save_task(task.clone())?;
        Ok(task)
    }

    /// Declare that `successor` waits on `predecessor`.
    pub fn declare_dependency(&mut self, predecessor: &str, successor: &str) -> Result<()> {
        self.load_task(predecessor)?;
        self.load_task(successor)?;
        self.graph.add_edge(predecessor, successor)?;
        info!(predecessor, successor, "dependency declared");
        Ok(())
    }

    pub fn remove_dependency(&mut self, predecessor: &str, successor: &str) -> Result<()> {
        self.graph.remove_edge(predecessor, successor)?;
        info!(predecessor, successor, "dependency removed");
        Ok(())
    }

    /// Mark a task completed, slide its direct successors, and re-evaluate
    /// the owning project.
    ///
    /// Completing an already-completed task re-runs the propagation, which
    /// is idempotent.
    pub fn complete_task(&mut self, id: &str) -> Result<CompletionReport> {
        let mut task = self.load_task(id)?;
        let newly_completed = !task.completed;
        task.completed = true;
        self.propagate(task, newly_completed)
    }

    /// Re-run cascade and project evaluation for a task without changing its
    /// own flag, e.g. after an interrupted [`Self::complete_task`].
    pub fn resync_task(&mut self, id: &str) -> Result<CompletionReport> {
        let task = self.load_task(id)?;
        self.propagate(task, false)
    }

    /// Clear a task's completion flag. The owning project's flag is left
    /// untouched.
    pub fn reopen_task(&mut self, id: &str) -> Result<Task> {
        let mut task = self.load_task(id)?;
        if !task.completed {
            debug!(task = %task.id, "task already open");
            return Ok(task);
        }

        task.completed = false;
        if self.store.project(&task.project).is_some_and(|p| p.completed) {
            warn!(
                task = %task.id,
                project = %task.project,
                "reopened task in a completed project; project stays completed"
            );
        }
        self.store.save_task(task.clone())?;
        Ok(task)
    }

    /// Delete a task after dropping every dependency that mentions it.
    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        let task = self.load_task(id)?;

        let dropped = self.graph.remove_all_edges_for(id);
        self.store.remove_task(id)?;

        if let Some(mut project) = self.store.project(&task.project) {
            project.tasks.retain(|t| t != id);
            self.store.save_project(project)?;
        }

        info!(task = %id, dependencies = dropped, "task removed");
        Ok(task)
    }

    /// Delete a project together with every task it owns.
    pub fn remove_project(&mut self, id: &str) -> Result<Project> {
        let project = self
            .store
            .project(id)
            .ok_or_else(|| WorkplanError::ProjectNotFound(id.to_string()))?;

        let mut owned: Vec<String> = self
            .store
            .tasks_in_project(id)
            .into_iter()
            .map(|t| t.id)
            .collect();
        for listed in &project.tasks {
            if !owned.contains(listed) {
                owned.push(listed.clone());
            }
        }

        for task in &owned {
            if self.store.task(task).is_some() {
                self.remove_task(task)?;
            }
        }
        self.store.remove_project(id)?;

        info!(project = %id, tasks = owned.len(), "project removed");
        Ok(project)
    }

    fn load_task(&self, id: &str) -> Result<Task> {
        self.store
            .task(id)
            .ok_or_else(|| WorkplanError::TaskNotFound(id.to_string()))
    }

    fn propagate(&mut self, task: Task, newly_completed: bool) -> Result<CompletionReport> {
        let mut project = self
            .store
            .project(&task.project)
            .ok_or_else(|| WorkplanError::ProjectNotFound(task.project.clone()))?;

        let mut successors: Vec<Task> = Vec::new();
        for succ in self.graph.direct_successors(&task.id) {
            match self.store.task(&succ) {
                Some(t) => successors.push(t),
                None => warn!(
                    task = %task.id,
                    successor = %succ,
                    "dependency points at a missing task; skipping"
                ),
            }
        }

        // Nothing has been written yet; a failed cascade leaves the store as is.
        let rescheduled = cascade_from(&self.graph, &task, &mut successors)?;

        self.store.save_task(task.clone())?;
        for succ in successors {
            self.store.save_task(succ)?;
        }

        let owned = self.store.tasks_in_project(&project.id);
        let completion = evaluate(&mut project, &owned);
        self.store.save_project(project.clone())?;

        info!(
            task = %task.id,
            newly_completed,
            rescheduled = rescheduled.len(),
            project = %project.id,
            ?completion,
            "task completion propagated"
        );

        Ok(CompletionReport {
            task: task.id,
            newly_completed,
            rescheduled,
            project: project.id,
            completion,
        })
    }
}
