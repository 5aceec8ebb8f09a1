use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};

const BINARY_NAME: &str = "cm-dash";

/// Command with an isolated $HOME so no real config is picked up.
fn command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home).env_remove("DASH_SOURCE");
    cmd
}

/// Writes a small fixture tree: `<root>/dash` with two products (one with a
/// run) and `<root>/nexus` with one decision.
fn write_fixtures(root: &Path) -> PathBuf {
    let dash = root.join("dash");
    fs::create_dir_all(dash.join("runs/alpha")).unwrap();
    fs::write(
        dash.join("products.json"),
        r#"{ "products": [
            { "product_id": "alpha", "display_name": "Alpha Service", "owner": "ops", "status": "idle" },
            { "product_id": "beta", "display_name": "Beta Service", "owner": "dev", "status": "paused" }
        ] }"#,
    )
    .unwrap();
    fs::write(
        dash.join("runs/alpha/last_run.json"),
        r#"{ "run_id": "run_1", "status": "success", "schema_version": "0.1",
             "ended_at": "2025-12-21T10:15:00Z", "summary": "All green",
             "banana_economy": { "spent_tokens": 10, "budget_tokens": 50000,
                                 "spent_minutes": 12, "budget_minutes": 90 },
             "kill_switch": { "enabled": false }, "pr_wave": { "state": "none", "open_prs": 0 },
             "evidence": { "paths": ["evidence/ci/report.html"] } }"#,
    )
    .unwrap();
    fs::create_dir_all(root.join("nexus/outbox")).unwrap();
    fs::write(
        root.join("nexus/outbox/dec_20251221_001.json"),
        r#"{ "decision_id": "dec_20251221_001", "type": "budget_grant",
             "status": "approved", "target": "alpha" }"#,
    )
    .unwrap();
    dash
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let home = tempfile::tempdir().unwrap();
    command(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Renders the Code Monkeys product dashboard"));
}

#[test]
/// Render should write a page with one card per product and the resolved queue.
fn render_writes_dashboard_page() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let dash = write_fixtures(root.path());
    let output = root.path().join("out/index.html");

    command(home.path())
        .arg("render")
        .arg("--source")
        .arg(&dash)
        .arg("--output")
        .arg(&output)
        .arg("--title")
        .arg("Ops Board")
        .assert()
        .success()
        .stdout(contains("Dashboard written"))
        .stderr(contains("No config file found"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"data-state="loaded""#));
    assert!(html.contains("<title>Ops Board</title>"));
    assert!(html.contains("Alpha Service"));
    assert!(html.contains("Beta Service"));
    assert!(html.contains("12 min"));
    assert!(html.contains(">report.html</a>"));
    assert!(html.contains("No Run Data"));
    assert!(html.contains("dec_20251221_001"));
    assert!(html.find("Alpha Service").unwrap() < html.find("Beta Service").unwrap());
}

#[test]
/// A missing manifest should produce the error page and a failing exit code.
fn render_without_manifest_writes_error_page() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("index.html");

    command(home.path())
        .arg("render")
        .arg("--source")
        .arg(root.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("Failed to load products.json"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"<div id="error">Error: Failed to load products.json</div>"#));
    assert!(html.contains(r#"<div id="dashboard" class="hidden">"#));
    assert!(html.contains(r#"<div id="loading" class="hidden">"#));
}

#[test]
/// Init should write a default config and refuse to overwrite it without --force.
fn init_writes_config_once() {
    let home = tempfile::tempdir().unwrap();
    let config_path = home.path().join(".codemonkeys").join("dash.json");

    command(home.path()).arg("init").assert().success();
    assert!(config_path.exists());

    command(home.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("--force"));

    command(home.path())
        .arg("init")
        .arg("--force")
        .assert()
        .success();
}

#[test]
/// The source named in the config is used when no flag is given.
fn render_uses_configured_source() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let dash = write_fixtures(root.path());
    let output = root.path().join("configured.html");
    let config_path = root.path().join("dash.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "source": {:?}, "output": {:?}, "nexus": {{ "requests": [], "decisions": [] }} }}"#,
            dash.display().to_string(),
            output.display().to_string()
        ),
    )
    .unwrap();

    command(home.path())
        .arg("--config")
        .arg(&config_path)
        .arg("render")
        .assert()
        .success()
        .stderr(contains("No config file found").not());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("Alpha Service"));
    assert!(html.contains("No pending requests or decisions"));
}
