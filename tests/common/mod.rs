// tests/common/mod.rs

#![allow(dead_code)]

pub use workplan_test_utils::{builders, date, init_tracing};

use workplan::dag::DependencyGraph;
use workplan::engine::{Planner, PlannerOptions};
use workplan::model::Project;
use workplan::store::MemoryStore;

/// Empty planner with one project `p` covering June 2024.
pub fn planner_with_project() -> Planner<MemoryStore> {
    let mut planner = Planner::new(
        MemoryStore::new(),
        DependencyGraph::new(),
        PlannerOptions::default(),
    );
    planner
        .add_project(Project::new("p", date("2024-06-03"), date("2024-06-28")).unwrap())
        .unwrap();
    planner
}
