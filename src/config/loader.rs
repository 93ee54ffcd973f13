// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Plan file used when `--plan` is not given, relative to the working directory.
pub const DEFAULT_PLAN_FILE: &str = "Workplan.toml";

/// Load a plan file from a given path and return the raw `RawPlanFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (unknown references, cycles, etc.). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let plan: RawPlanFile = toml::from_str(&contents)?;

    Ok(plan)
}

/// Load a plan file from path and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - unknown project and `after` references,
///   - inverted date ranges and negative durations,
///   - dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(&path)?;
    let plan = PlanFile::try_from(raw)?;
    debug!(
        path = %path.as_ref().display(),
        projects = plan.project.len(),
        tasks = plan.task.len(),
        "plan loaded"
    );
    Ok(plan)
}

/// Serialize a plan back to TOML at `path`, replacing any existing file.
pub fn save_to_path(plan: &PlanFile, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let contents = toml::to_string_pretty(&plan.clone().into_raw())?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), "plan written");
    Ok(())
}
