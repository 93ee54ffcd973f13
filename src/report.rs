// src/report.rs

//! Plain-text rendering of plans and operation results for the CLI.

use std::fmt::Write;

use crate::engine::{CompletionReport, Planner};
use crate::schedule::Completion;
use crate::store::PlanStore;

/// Short overview used by `workplan check`.
pub fn render_summary<S: PlanStore>(planner: &Planner<S>) -> String {
    let store = planner.store();
    let graph = planner.graph();
    let mut out = String::new();

    let _ = writeln!(out, "workplan check");
    let _ = writeln!(
        out,
        "  config.default_duration = {}",
        planner.options().default_duration
    );
    let _ = writeln!(out);

    let projects = store.projects();
    let _ = writeln!(out, "projects ({}):", projects.len());
    for project in projects {
        let state = if project.completed { "done" } else { "open" };
        let _ = writeln!(
            out,
            "  - {} [{}] {} .. {} ({} tasks)",
            project.id,
            state,
            project.start,
            project.end,
            store.tasks_in_project(&project.id).len()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "dependencies ({}):", graph.edge_count());
    for edge in graph.edges() {
        let _ = writeln!(out, "  - {} -> {}", edge.predecessor, edge.successor);
    }

    out
}

/// One line per task, grouped by project, used by `workplan schedule`.
pub fn render_schedule<S: PlanStore>(planner: &Planner<S>) -> String {
    let store = planner.store();
    let graph = planner.graph();
    let mut out = String::new();

    for project in store.projects() {
        let _ = writeln!(out, "{} ({})", project.name, project.id);
        for task in store.tasks_in_project(&project.id) {
            let mark = if task.completed { "x" } else { " " };
            let _ = write!(
                out,
                "  [{}] {:<16} {} .. {}",
                mark, task.id, task.start, task.end
            );
            let preds = graph.direct_predecessors(&task.id);
            if !preds.is_empty() {
                let preds: Vec<&str> = preds.iter().map(String::as_str).collect();
                let _ = write!(out, "  after: {}", preds.join(", "));
            }
            let _ = writeln!(out);
        }
    }

    out
}

/// Result of `workplan complete`.
pub fn render_completion(report: &CompletionReport) -> String {
    let mut out = String::new();

    if report.newly_completed {
        let _ = writeln!(out, "completed {}", report.task);
    } else {
        let _ = writeln!(out, "{} was already completed; propagation re-run", report.task);
    }

    for change in &report.rescheduled {
        if change.changed() {
            let _ = writeln!(
                out,
                "  rescheduled {}: {} .. {} -> {} .. {}",
                change.task, change.old_start, change.old_end, change.new_start, change.new_end
            );
        } else {
            let _ = writeln!(out, "  {} unchanged", change.task);
        }
    }

    let state = match report.completion {
        Completion::MarkedComplete => "complete",
        Completion::NotYetComplete => "not yet complete",
    };
    let _ = writeln!(out, "project {} is {}", report.project, state);

    out
}
