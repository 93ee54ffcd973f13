// src/dag/mod.rs

//! Task dependency graph.
//!
//! - [`graph`] holds the acyclic predecessor -> successor edge set and the
//!   reachability check that guards every insertion.

pub mod graph;

pub use graph::DependencyGraph;
