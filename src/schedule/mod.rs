// src/schedule/mod.rs

//! State propagation triggered by task completion.
//!
//! - [`cascade`] slides the direct successors of a completed task.
//! - [`completion`] derives the owning project's completion flag.
//!
//! Both are pure functions over explicit snapshots and are safe to re-run.

pub mod cascade;
pub mod completion;

pub use cascade::{cascade_from, Rescheduled};
pub use completion::{evaluate, Completion};
