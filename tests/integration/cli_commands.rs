// tests/integration/cli_commands.rs

use clap::Parser;
use tempfile::tempdir;
use workplan::cli::{CliArgs, Command};
use workplan::config::{DEFAULT_PLAN_FILE, load_and_validate};
use workplan::store::PlanStore;
use workplan::{execute, run};

use crate::common::builders::{PlanFileBuilder, TaskConfigBuilder};
use crate::common::{date, init_tracing};

const PLAN: &str = r#"
[project.site]
name = "Site relaunch"
start = "2024-06-03"
end = "2024-06-28"

[task.design]
project = "site"
start = "2024-06-10"
end = "2024-06-14"

[task.build]
project = "site"
start = "2024-06-17"
end = "2024-06-19"
after = ["design"]
"#;

#[test]
fn check_and_schedule_render_plan() {
    init_tracing();
    let plan = PlanFileBuilder::new()
        .with_project("site", "2024-06-03", "2024-06-28")
        .with_task("design", TaskConfigBuilder::new("site", "2024-06-10").build())
        .with_task(
            "build",
            TaskConfigBuilder::new("site", "2024-06-17").after("design").build(),
        )
        .build();
    let mut planner = plan.into_planner().unwrap();

    let summary = execute(&mut planner, &Command::Check).unwrap();
    assert!(summary.contains("projects (1):"));
    assert!(summary.contains("design -> build"));

    let schedule = execute(&mut planner, &Command::Schedule).unwrap();
    assert!(schedule.contains("after: design"));
    assert!(schedule.contains("2024-06-17"));
}

#[test]
fn complete_reports_rescheduled_successor() {
    init_tracing();
    let plan = PlanFileBuilder::new()
        .with_project("site", "2024-06-03", "2024-06-28")
        .with_task(
            "design",
            TaskConfigBuilder::new("site", "2024-06-10").end("2024-06-14").build(),
        )
        .with_task(
            "build",
            TaskConfigBuilder::new("site", "2024-06-17")
                .end("2024-06-19")
                .after("design")
                .build(),
        )
        .build();
    let mut planner = plan.into_planner().unwrap();

    let out = execute(
        &mut planner,
        &Command::Complete {
            task: "design".to_string(),
        },
    )
    .unwrap();
    assert!(out.contains("completed design"));
    assert!(out.contains(
        "rescheduled build: 2024-06-17 .. 2024-06-19 -> 2024-06-15 .. 2024-06-19"
    ));
    assert!(out.contains("project site is not yet complete"));

    let err = execute(
        &mut planner,
        &Command::Depend {
            predecessor: "build".to_string(),
            successor: "design".to_string(),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("cyclic dependency"));
}

#[test]
fn write_flag_persists_mutations() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("Workplan.toml");
    std::fs::write(&path, PLAN).unwrap();
    let path_str = path.to_str().unwrap();

    // Without --write nothing changes on disk.
    let args =
        CliArgs::try_parse_from(["workplan", "--plan", path_str, "complete", "design"]).unwrap();
    assert!(args.command.mutates());
    run(args).unwrap();
    let untouched = load_and_validate(&path).unwrap();
    assert!(!untouched.task["design"].completed);

    let args = CliArgs::try_parse_from([
        "workplan", "--plan", path_str, "--write", "complete", "design",
    ])
    .unwrap();
    run(args).unwrap();

    let planner = load_and_validate(&path).unwrap().into_planner().unwrap();
    assert!(planner.store().task("design").unwrap().completed);
    let build = planner.store().task("build").unwrap();
    assert_eq!(build.start, date("2024-06-15"));
    assert_eq!(planner.store().project("site").unwrap().name, "Site relaunch");

    let args = CliArgs::try_parse_from([
        "workplan", "--plan", path_str, "--write", "remove-task", "design",
    ])
    .unwrap();
    run(args).unwrap();
    let planner = load_and_validate(&path).unwrap().into_planner().unwrap();
    assert!(planner.store().task("design").is_none());
    assert!(planner.graph().is_empty());
}

#[test]
fn plan_path_defaults_to_workplan_toml() {
    let args = CliArgs::try_parse_from(["workplan", "check"]).unwrap();
    assert_eq!(args.plan, DEFAULT_PLAN_FILE);
    assert_eq!(args.plan, "Workplan.toml");
    assert!(!args.write);
    assert!(!args.command.mutates());
}

#[test]
fn check_counts_tasks_from_the_store() {
    init_tracing();
    let plan = PlanFileBuilder::new()
        .with_project("site", "2024-06-03", "2024-06-28")
        .with_project("ops", "2024-06-03", "2024-06-28")
        .with_task("design", TaskConfigBuilder::new("site", "2024-06-10").build())
        .with_task("build", TaskConfigBuilder::new("site", "2024-06-11").build())
        .build();
    let mut planner = plan.into_planner().unwrap();

    let summary = execute(&mut planner, &Command::Check).unwrap();
    assert!(summary.contains("site [open] 2024-06-03 .. 2024-06-28 (2 tasks)"));
    assert!(summary.contains("ops [open] 2024-06-03 .. 2024-06-28 (0 tasks)"));

    execute(
        &mut planner,
        &Command::RemoveTask {
            task: "build".to_string(),
        },
    )
    .unwrap();
    let summary = execute(&mut planner, &Command::Check).unwrap();
    assert!(summary.contains("site [open] 2024-06-03 .. 2024-06-28 (1 tasks)"));
}
