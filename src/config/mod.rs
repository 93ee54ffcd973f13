// src/config/mod.rs

//! Plan file loading and validation for workplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load and save a plan file (`loader.rs`).
//! - Validate references, date ranges and acyclicity (`validate.rs`).
//! - Convert between a plan file and a live [`Planner`](crate::engine::Planner)
//!   (`plan.rs`).

pub mod loader;
pub mod model;
pub mod plan;
pub mod validate;

pub use loader::{DEFAULT_PLAN_FILE, load_and_validate, load_from_path, save_to_path};
pub use model::{ConfigSection, PlanFile, ProjectConfig, RawPlanFile, TaskConfig};
