//! Smoke tests driving the `cluster` binary against checked-in fixtures

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/config")
        .join(name)
}

fn cluster() -> Command {
    Command::cargo_bin("cluster").unwrap()
}

#[test]
fn test_system_list() {
    cluster()
        .args(["system", "list", "-c"])
        .arg(fixture("systems.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("prodcluster"))
        .stdout(predicate::str::contains("testcluster"));
}

#[test]
fn test_system_show_by_alias() {
    cluster()
        .args(["system", "show", "prod", "-c"])
        .arg(fixture("systems.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("prodcluster"))
        .stdout(predicate::str::contains("rabbit-node-1"));
}

#[test]
fn test_system_show_unknown_fails() {
    cluster()
        .args(["system", "show", "absent", "-c"])
        .arg(fixture("systems.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_system_verify_reports_invalid_topology() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("systems.yaml");
    fs::write(
        &path,
        r#"
systems:
  - name: prodcluster
    overlays: [a, a]
    workers: [w]
    rabbits: {r1: {0: c1}}
"#,
    )
    .unwrap();

    cluster()
        .args(["system", "verify", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("declared more than once"));
}

#[test]
fn test_repo_show() {
    cluster()
        .args(["repo", "storage-operator", "-c"])
        .arg(fixture("repositories.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-operator"))
        .stdout(predicate::str::contains("IMAGE_TAG_BASE"));
}

#[test]
fn test_services() {
    cluster()
        .args(["services", "-c"])
        .arg(fixture("repositories.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("object-store"));
}

#[test]
fn test_daemons() {
    cluster()
        .args(["daemons", "-c"])
        .arg(fixture("daemons.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("node-manager"))
        .stdout(predicate::str::contains("data-mover"));
}
