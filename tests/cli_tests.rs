// ABOUTME: Integration tests for the CLI application
// ABOUTME: Tests render, list and check commands end to end through the compiled binary

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::{quiz_document, TestEnvironment};

fn domtemplate() -> Command {
    let mut cmd = Command::cargo_bin("domtemplate").expect("binary should build");
    cmd.env_remove("RUST_LOG")
        .env_remove("DOMTEMPLATE_MARKER_OPEN")
        .env_remove("DOMTEMPLATE_MARKER_CLOSE");
    cmd
}

#[test]
fn test_cli_help_command() {
    domtemplate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_cli_version_command() {
    domtemplate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_cli_render_from_document() {
    let env = TestEnvironment::new();
    let document = env.create_document("quiz", &quiz_document()).await;

    domtemplate()
        .current_dir(env.path())
        .args(["render", document.to_str().unwrap(), "greeting", "-V", "name=World"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[tokio::test]
async fn test_cli_render_with_params_file() {
    let env = TestEnvironment::new();
    let document = env.create_document("quiz", &quiz_document()).await;
    let params = env
        .create_file(
            "params.json",
            r#"{"question": {"title": "2 + 2?"}, "round": 1}"#,
        )
        .await;

    domtemplate()
        .current_dir(env.path())
        .args([
            "render",
            document.to_str().unwrap(),
            "question",
            "--params",
            params.to_str().unwrap(),
            "-V",
            "round=final",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>2 + 2?</h2><p>Round final</p>"));
}

#[tokio::test]
async fn test_cli_render_to_output_file() {
    let env = TestEnvironment::new();
    env.create_template_file("greeting.html", "<!----Hi ${name}---->")
        .await;
    let output = env.output_file("out.html");

    domtemplate()
        .current_dir(env.path())
        .args([
            "render",
            env.templates_dir().to_str().unwrap(),
            "greeting",
            "--var",
            "name=Ada",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(output).unwrap(), "Hi Ada");
}

#[tokio::test]
async fn test_cli_render_unknown_identifier_fails() {
    let env = TestEnvironment::new();
    let document = env.create_document("quiz", &quiz_document()).await;

    domtemplate()
        .current_dir(env.path())
        .args(["render", document.to_str().unwrap(), "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[tokio::test]
async fn test_cli_render_missing_parameter_fails() {
    let env = TestEnvironment::new();
    let document = env.create_document("quiz", &quiz_document()).await;

    domtemplate()
        .current_dir(env.path())
        .args(["render", document.to_str().unwrap(), "greeting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Undefined name 'name'"));
}

#[tokio::test]
async fn test_cli_invalid_variable_format() {
    let env = TestEnvironment::new();
    let document = env.create_document("quiz", &quiz_document()).await;

    domtemplate()
        .current_dir(env.path())
        .args(["render", document.to_str().unwrap(), "greeting", "-V", "oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected 'key=value'"));
}

#[tokio::test]
async fn test_cli_list_templates() {
    let env = TestEnvironment::new();
    let document = env.create_document("quiz", &quiz_document()).await;

    domtemplate()
        .current_dir(env.path())
        .args(["list", document.to_str().unwrap()])
        .assert()
        .success()
        .stdout("greeting\nquestion\nscore-row\nfooter\n");
}

#[tokio::test]
async fn test_cli_check_template() {
    let env = TestEnvironment::new();
    let document = env.create_document("quiz", &quiz_document()).await;

    domtemplate()
        .current_dir(env.path())
        .args(["check", document.to_str().unwrap(), "question"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template 'question' is valid"))
        .stdout(predicate::str::contains("Placeholders: question.title, round"));
}

#[tokio::test]
async fn test_cli_config_file_markers_and_vars() {
    let env = TestEnvironment::new();
    env.create_template_file("banner.html", "[[${site}: ${title}]]")
        .await;
    let config = env
        .create_file(
            "custom.yaml",
            r#"
markers:
  open: "[["
  close: "]]"
template_vars:
  site: example.org
"#,
        )
        .await;

    domtemplate()
        .current_dir(env.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "render",
            env.templates_dir().to_str().unwrap(),
            "banner",
            "-V",
            "title=News",
        ])
        .assert()
        .success()
        .stdout("example.org: News\n");
}

#[tokio::test]
async fn test_cli_missing_config_file_fails() {
    let env = TestEnvironment::new();
    env.create_template_file("plain.html", "text").await;

    domtemplate()
        .current_dir(env.path())
        .args([
            "--config",
            "missing.yaml",
            "list",
            env.templates_dir().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("missing.yaml"));
}
