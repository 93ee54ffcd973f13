// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{Result, WorkplanError};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = WorkplanError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.config, raw.project, raw.task))
    }
}

fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_projects(plan)?;
    validate_global_config(plan)?;
    validate_projects(plan)?;
    validate_tasks(plan)?;
    validate_dag(plan)?;
    Ok(())
}

fn ensure_has_projects(plan: &RawPlanFile) -> Result<()> {
    if plan.project.is_empty() {
        return Err(WorkplanError::ConfigError(
            "plan must contain at least one [project.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(plan: &RawPlanFile) -> Result<()> {
    if plan.config.default_duration < 0 {
        return Err(WorkplanError::ConfigError(format!(
            "[config].default_duration must be >= 0 (got {})",
            plan.config.default_duration
        )));
    }
    Ok(())
}

fn validate_projects(plan: &RawPlanFile) -> Result<()> {
    for (id, project) in plan.project.iter() {
        if project.end < project.start {
            return Err(WorkplanError::ConfigError(format!(
                "project '{}' ends ({}) before it starts ({})",
                id, project.end, project.start
            )));
        }
    }
    Ok(())
}

fn validate_tasks(plan: &RawPlanFile) -> Result<()> {
    for (id, task) in plan.task.iter() {
        if !plan.project.contains_key(&task.project) {
            return Err(WorkplanError::ConfigError(format!(
                "task '{}' belongs to unknown project '{}'",
                id, task.project
            )));
        }

        match (task.duration, task.end) {
            (Some(duration), _) if duration < 0 => {
                return Err(WorkplanError::ConfigError(format!(
                    "task '{}' has negative duration {}",
                    id, duration
                )));
            }
            (None, Some(end)) if end < task.start => {
                return Err(WorkplanError::ConfigError(format!(
                    "task '{}' ends ({}) before it starts ({})",
                    id, end, task.start
                )));
            }
            _ => {}
        }

        for dep in task.after.iter() {
            if !plan.task.contains_key(dep) {
                return Err(WorkplanError::ConfigError(format!(
                    "task '{}' has unknown dependency '{}' in `after`",
                    id, dep
                )));
            }
            if dep == id {
                return Err(WorkplanError::ConfigError(format!(
                    "task '{}' cannot depend on itself in `after`",
                    id
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(plan: &RawPlanFile) -> Result<()> {
    // Edge direction: predecessor -> task.
    // For:
    //   [task.B]
    //   after = ["A"]
    // we add edge A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in plan.task.keys() {
        graph.add_node(id.as_str());
    }

    for (id, task) in plan.task.iter() {
        for dep in task.after.iter() {
            graph.add_edge(dep.as_str(), id.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(WorkplanError::DagCycle(format!(
            "cycle detected in task dependencies involving task '{}'",
            cycle.node_id()
        ))),
    }
}
