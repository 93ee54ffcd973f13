// src/config/plan.rs

//! Conversion between a validated [`PlanFile`] and a live [`Planner`].

use std::collections::BTreeMap;

use crate::config::model::{ConfigSection, PlanFile, ProjectConfig, TaskConfig};
use crate::dag::DependencyGraph;
use crate::engine::{NewTask, Planner, PlannerOptions};
use crate::errors::Result;
use crate::model::Project;
use crate::store::{MemoryStore, PlanStore};

impl PlanFile {
    pub fn options(&self) -> PlannerOptions {
        PlannerOptions {
            default_duration: self.config.default_duration,
        }
    }

    /// Build an in-memory planner holding every project, task and
    /// dependency from this plan.
    ///
    /// Tasks go through [`Planner::add_task`] and dependencies through
    /// [`Planner::declare_dependency`], so end dates are derived by the
    /// calendar exactly as for tasks created at runtime.
    pub fn into_planner(&self) -> Result<Planner<MemoryStore>> {
        let mut planner = Planner::new(MemoryStore::new(), DependencyGraph::new(), self.options());

        for (id, cfg) in self.project.iter() {
            let mut project = Project::new(id, cfg.start, cfg.end)?
                .named(cfg.name.clone().unwrap_or_else(|| id.clone()));
            project.completed = cfg.completed;
            planner.add_project(project)?;
        }

        for (id, cfg) in self.task.iter() {
            planner.add_task(NewTask {
                id: id.clone(),
                project: cfg.project.clone(),
                name: cfg.name.clone(),
                start: cfg.start,
                end: cfg.end,
                duration: cfg.duration,
                priority: cfg.priority,
                completed: cfg.completed,
            })?;
        }

        for (id, cfg) in self.task.iter() {
            for dep in cfg.after.iter() {
                planner.declare_dependency(dep, id)?;
            }
        }

        Ok(planner)
    }

    /// Snapshot a planner back into plan-file form.
    ///
    /// Every task is written with an explicit `end`, so reloading the result
    /// reproduces the same dates.
    pub fn from_planner<S: PlanStore>(planner: &Planner<S>) -> Self {
        let store = planner.store();
        let graph = planner.graph();

        let project: BTreeMap<String, ProjectConfig> = store
            .projects()
            .into_iter()
            .map(|p| {
                let name = (p.name != p.id).then(|| p.name.clone());
                (
                    p.id,
                    ProjectConfig {
                        name,
                        start: p.start,
                        end: p.end,
                        completed: p.completed,
                    },
                )
            })
            .collect();

        let task: BTreeMap<String, TaskConfig> = store
            .tasks()
            .into_iter()
            .map(|t| {
                let name = (t.name != t.id).then(|| t.name.clone());
                let after = graph.direct_predecessors(&t.id).into_iter().collect();
                (
                    t.id,
                    TaskConfig {
                        project: t.project,
                        name,
                        start: t.start,
                        end: Some(t.end),
                        duration: None,
                        completed: t.completed,
                        priority: t.priority,
                        after,
                    },
                )
            })
            .collect();

        let config = ConfigSection {
            default_duration: planner.options().default_duration,
        };

        PlanFile::new_unchecked(config, project, task)
    }
}
