// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use crate::errors::{Result, WorkplanError};
use crate::model::{DependencyEdge, TaskId};

/// Task-to-task dependency edges, kept acyclic.
///
/// Two indexes are maintained side by side:
/// - `successors`: predecessor -> tasks waiting on it (forward traversal)
/// - `predecessors`: successor -> tasks it waits on (incident-edge cleanup)
///
/// Nodes exist only implicitly through their edges; a task with no
/// dependencies in either direction has no entry at all.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    successors: BTreeMap<TaskId, BTreeSet<TaskId>>,
    predecessors: BTreeMap<TaskId, BTreeSet<TaskId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by inserting every edge through [`Self::add_edge`], so
    /// self-loops and cycles are rejected exactly as they would be at runtime.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = DependencyEdge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.predecessor, &edge.successor)?;
        }
        Ok(graph)
    }

    /// Declare that `successor` may not start before `predecessor` completes.
    ///
    /// Fails without touching the graph if the edge is a self-loop or if
    /// `successor` can already reach `predecessor`. Re-adding an existing
    /// edge is a no-op.
    pub fn add_edge(&mut self, predecessor: &str, successor: &str) -> Result<()> {
        if predecessor == successor {
            return Err(WorkplanError::SelfDependency(predecessor.to_string()));
        }

        if self.contains_edge(predecessor, successor) {
            debug!(predecessor, successor, "dependency already present");
            return Ok(());
        }

        if self.can_reach(successor, predecessor) {
            return Err(WorkplanError::CyclicDependency {
                predecessor: predecessor.to_string(),
                successor: successor.to_string(),
            });
        }

        self.insert(predecessor, successor);
        debug!(predecessor, successor, "dependency added");
        Ok(())
    }

    /// Remove a single edge, failing if it is not present.
    pub fn remove_edge(&mut self, predecessor: &str, successor: &str) -> Result<()> {
        if !self.contains_edge(predecessor, successor) {
            return Err(WorkplanError::EdgeNotFound {
                predecessor: predecessor.to_string(),
                successor: successor.to_string(),
            });
        }

        remove_from(&mut self.successors, predecessor, successor);
        remove_from(&mut self.predecessors, successor, predecessor);
        debug!(predecessor, successor, "dependency removed");
        Ok(())
    }

    /// Remove every edge that mentions `task` on either side.
    ///
    /// Returns the number of edges removed.
    pub fn remove_all_edges_for(&mut self, task: &str) -> usize {
        let outgoing = self.successors.remove(task).unwrap_or_default();
        let incoming = self.predecessors.remove(task).unwrap_or_default();

        for succ in &outgoing {
            remove_from(&mut self.predecessors, succ, task);
        }
        for pred in &incoming {
            remove_from(&mut self.successors, pred, task);
        }

        let removed = outgoing.len() + incoming.len();
        if removed > 0 {
            debug!(task, removed, "removed all dependencies of task");
        }
        removed
    }

    /// Tasks that list `task` as a direct predecessor.
    pub fn direct_successors(&self, task: &str) -> BTreeSet<TaskId> {
        self.successors.get(task).cloned().unwrap_or_default()
    }

    /// Tasks that `task` directly waits on.
    pub fn direct_predecessors(&self, task: &str) -> BTreeSet<TaskId> {
        self.predecessors.get(task).cloned().unwrap_or_default()
    }

    pub fn contains_edge(&self, predecessor: &str, successor: &str) -> bool {
        self.successors
            .get(predecessor)
            .is_some_and(|succs| succs.contains(successor))
    }

    /// Whether `to` is reachable from `from` by following edges forward.
    ///
    /// Iterative DFS with a visited set: every edge reachable from `from` is
    /// examined at most once, and the walk terminates even if the edge set
    /// already contains a cycle.
    pub fn can_reach(&self, from: &str, to: &str) -> bool {
        let mut stack: Vec<&str> = vec![from];
        let mut visited: HashSet<&str> = HashSet::new();

        while let Some(node) = stack.pop() {
            if node == to {
                return true;
            }
            if !visited.insert(node) {
                continue;
            }
            if let Some(succs) = self.successors.get(node) {
                stack.extend(
                    succs
                        .iter()
                        .map(String::as_str)
                        .filter(|s| !visited.contains(s)),
                );
            }
        }

        false
    }

    /// All edges, ordered by predecessor then successor.
    pub fn edges(&self) -> Vec<DependencyEdge> {
        self.successors
            .iter()
            .flat_map(|(pred, succs)| {
                succs
                    .iter()
                    .map(move |succ| DependencyEdge::new(pred.clone(), succ.clone()))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    fn insert(&mut self, predecessor: &str, successor: &str) {
        self.successors
            .entry(predecessor.to_string())
            .or_default()
            .insert(successor.to_string());
        self.predecessors
            .entry(successor.to_string())
            .or_default()
            .insert(predecessor.to_string());
    }
}

/// Remove `value` from the set under `key`, dropping the entry once empty.
fn remove_from(index: &mut BTreeMap<TaskId, BTreeSet<TaskId>>, key: &str, value: &str) {
    if let Some(set) = index.get_mut(key) {
        set.remove(value);
        if set.is_empty() {
            index.remove(key);
        }
    }
}
