// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;
use workplan::config::load_and_validate;
use workplan::errors::WorkplanError;

fn plan_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

const PROJECT: &str = r#"
[project.site]
start = "2024-06-03"
end = "2024-06-28"
"#;

#[test]
fn test_dependency_cycle_returns_structured_error() {
    let file = plan_file(&format!(
        r#"{PROJECT}
[task.A]
project = "site"
start = "2024-06-10"
after = ["B"]

[task.B]
project = "site"
start = "2024-06-10"
after = ["A"]
"#
    ));

    match load_and_validate(file.path()) {
        Err(WorkplanError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("A") || msg.contains("B"));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_dependency_returns_config_error() {
    let file = plan_file(&format!(
        r#"{PROJECT}
[task.A]
project = "site"
start = "2024-06-10"
after = ["NonExistent"]
"#
    ));

    match load_and_validate(file.path()) {
        Err(WorkplanError::ConfigError(msg)) => {
            assert!(msg.contains("unknown dependency"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_self_dependency_returns_config_error() {
    let file = plan_file(&format!(
        r#"{PROJECT}
[task.A]
project = "site"
start = "2024-06-10"
after = ["A"]
"#
    ));

    match load_and_validate(file.path()) {
        Err(WorkplanError::ConfigError(msg)) => assert!(msg.contains("itself")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unknown_project_returns_config_error() {
    let file = plan_file(&format!(
        r#"{PROJECT}
[task.A]
project = "elsewhere"
start = "2024-06-10"
"#
    ));

    match load_and_validate(file.path()) {
        Err(WorkplanError::ConfigError(msg)) => {
            assert!(msg.contains("unknown project 'elsewhere'"))
        }
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_negative_duration_and_inverted_range_are_rejected() {
    let negative = plan_file(&format!(
        r#"{PROJECT}
[task.A]
project = "site"
start = "2024-06-10"
duration = -3
"#
    ));
    assert!(matches!(
        load_and_validate(negative.path()),
        Err(WorkplanError::ConfigError(ref msg)) if msg.contains("negative duration")
    ));

    let inverted = plan_file(&format!(
        r#"{PROJECT}
[task.A]
project = "site"
start = "2024-06-10"
end = "2024-06-07"
"#
    ));
    assert!(matches!(
        load_and_validate(inverted.path()),
        Err(WorkplanError::ConfigError(ref msg)) if msg.contains("before it starts")
    ));
}

#[test]
fn test_plan_without_projects_is_rejected() {
    let file = plan_file("[config]\ndefault_duration = 1\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(WorkplanError::ConfigError(_))
    ));
}

#[test]
fn test_malformed_date_is_a_toml_error() {
    let file = plan_file(
        r#"
[project.site]
start = "June 3rd"
end = "2024-06-28"
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(WorkplanError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        load_and_validate(&missing),
        Err(WorkplanError::IoError(_))
    ));
}
