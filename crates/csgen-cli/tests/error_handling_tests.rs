//! Tests for failure exit codes and messages.

mod common;

use std::fs;

use predicates::prelude::*;

use common::{NO_INCLUDE, PROJECT, Workspace, csgen};

#[test]
fn test_missing_include_element() {
    let ws = Workspace::with_shipped_templates(NO_INCLUDE);

    ws.generate(&["class", "--name", "Board", "--no-wait"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Include element not found in project file",
        ))
        .stdout(predicate::str::contains("storing project file").not());

    assert_eq!(ws.manifest(), NO_INCLUDE);
}

#[test]
fn test_undefined_template_variable_fails() {
    let ws = Workspace::new(PROJECT);
    ws.write_template("class", "class.cs", "public class {{ nme }} {}\n");
    ws.write_template("class", "class_test.cs", "// {{ name }}\n");

    ws.generate(&["class", "--name", "Board", "--no-wait"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("class.cs"));

    assert_eq!(ws.manifest(), PROJECT);
}

#[test]
fn test_undefined_template_condition_fails() {
    let ws = Workspace::new(PROJECT);
    ws.write_template(
        "class",
        "class.cs",
        "{% if sealed %}sealed {% endif %}class {{ name }} {}\n",
    );
    ws.write_template("class", "class_test.cs", "// {{ name }}\n");

    ws.generate(&["class", "--name", "Board", "--no-wait"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("class.cs"));

    assert_eq!(ws.manifest(), PROJECT);
}

#[test]
fn test_missing_template_is_not_found() {
    let ws = Workspace::new(PROJECT);

    ws.generate(&["triad", "--name", "Login", "--no-wait"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found"))
        .stderr(predicate::str::contains("model.cs"));
}

#[test]
fn test_rejected_generator_arguments() {
    let ws = Workspace::with_shipped_templates(PROJECT);

    ws.generate(&["triad", "--name", "Login", "--set", "colour=red", "--no-wait"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rejected arguments [colour]"));

    assert!(!ws.project().join("LoginModel.cs").exists());
}

#[test]
fn test_missing_name_without_terminal() {
    let ws = Workspace::with_shipped_templates(PROJECT);

    ws.generate(&["class", "--no-wait"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing arguments [name]"))
        .stderr(predicate::str::contains("--set name=VALUE"));
}

#[test]
fn test_invalid_identifier() {
    let ws = Workspace::with_shipped_templates(PROJECT);

    ws.generate(&["class", "--name", "2Board", "--no-wait"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for argument 'name'"));
}

#[test]
fn test_folder_outside_project_is_rejected() {
    let ws = Workspace::with_shipped_templates(PROJECT);

    ws.generate(&["class", "--name", "Board", "--set", "folder=..", "--no-wait"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for argument 'folder'"));

    assert_eq!(ws.manifest(), PROJECT);
    assert!(!ws.project().join("Board.cs").exists());
}

#[test]
fn test_malformed_set_argument() {
    csgen()
        .args(["generate", "triad", "--set", "namespace"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_unknown_generator() {
    csgen()
        .args(["generate", "wizard"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_project_directory() {
    let ws = Workspace::with_shipped_templates(PROJECT);

    ws.generate(&["class", "--name", "Board", "--output-dir", "nowhere", "--no-wait"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_config_file() {
    let ws = Workspace::new(PROJECT);

    csgen()
        .arg("--config")
        .arg(ws.project().join("absent.toml"))
        .args(["config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_bad_insertion_path_is_config_error() {
    let ws = Workspace::with_shipped_templates(PROJECT);
    fs::write(
        ws.tools().join("csgen.toml"),
        "[manifest]\ninsertion_path = \"VisualStudioProject//Include\"\n",
    )
    .unwrap();

    ws.generate(&["class", "--name", "Board", "--no-wait"])
        .assert()
        .code(4);
}
