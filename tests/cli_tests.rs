//! CLI integration tests.

mod support;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use support::config::{write_temp_config, UNREACHABLE_MONGO};

fn stockroom() -> Command {
    let mut cmd = cargo_bin_cmd!("stockroom");
    for var in [
        "STOCKROOM_MONGO_URI",
        "STOCKROOM_ADMIN_PASSWORD",
        "STOCKROOM_APP_PASSWORD",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help() {
    stockroom()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stockroom"))
        .stdout(predicate::str::contains("provision"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version() {
    stockroom()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_provision_help_lists_policy() {
    stockroom()
        .args(["provision", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--on-existing"));
}

#[test]
fn config_validate_rejects_invalid_database_name() {
    let path = write_temp_config("[application]\ndatabase = \"bad.name\"\n");
    let output = stockroom()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .output()
        .expect("run stockroom");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        combined.contains("application.database"),
        "Expected error about application.database: {combined}"
    );
}

#[test]
fn config_validate_accepts_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stockroom.toml");
    fs::copy(
        concat!(env!("CARGO_MANIFEST_DIR"), "/stockroom.toml.example"),
        &path,
    )
    .unwrap();

    stockroom()
        .args(["config", "validate", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("container default"));
}

#[test]
fn config_missing_file_suggests_init() {
    stockroom()
        .args(["config", "validate", "-c", "/nonexistent/stockroom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config init"));
}

#[test]
fn config_init_writes_template_once() {
    let dir = TempDir::new().unwrap();

    stockroom()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let written = fs::read_to_string(dir.path().join("stockroom.toml")).unwrap();
    assert!(written.contains("[application]"));

    stockroom()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    stockroom()
        .current_dir(dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_uses_defaults_without_file() {
    let dir = TempDir::new().unwrap();

    stockroom()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(built-in defaults)"))
        .stdout(predicate::str::contains("readWrite@products"))
        .stdout(predicate::str::contains("12345678").not());
}

#[test]
fn config_show_json_masks_passwords() {
    let path = write_temp_config("[application]\npassword = \"s3cret\"\n");
    let output = stockroom()
        .args(["--json", "config", "show", "-c"])
        .arg(&path)
        .output()
        .expect("run stockroom");
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("\"config\""))
        .expect("config record");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["type"], "config");
    assert_eq!(value["payload"]["app_password"], "********");
    assert_eq!(value["payload"]["collection"], "product");
    assert!(!stdout.contains("s3cret"));
}

#[test]
fn import_with_missing_feed_fails() {
    let path = write_temp_config(UNREACHABLE_MONGO);
    let output = stockroom()
        .args(["import", "--feed", "/nonexistent/feed.xml", "-c"])
        .arg(&path)
        .output()
        .expect("run stockroom");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("IO error"), "stderr: {stderr}");
}

#[test]
fn provision_against_unreachable_deployment_fails_at_authenticate() {
    let path = write_temp_config(UNREACHABLE_MONGO);
    let output = stockroom()
        .args(["provision", "-c"])
        .arg(&path)
        .output()
        .expect("run stockroom");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("authenticate failed"), "stderr: {stderr}");
}

#[test]
fn json_errors_are_structured() {
    let output = stockroom()
        .args(["--json", "config", "validate", "-c", "/nonexistent/stockroom.toml"])
        .output()
        .expect("run stockroom");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("json error line");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["type"], "error");
    assert!(value["payload"]["message"]
        .as_str()
        .unwrap()
        .contains("failed to read config file"));
}
