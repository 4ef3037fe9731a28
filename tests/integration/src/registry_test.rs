//! End-to-end tests for the configuration registry
//!
//! These tests exercise the full flow against documents written to a temp
//! directory: topology load/verify/lookup, repository lookup with build
//! configuration, service listing, and daemon enumeration.

use cluster_config::{
    Error, SystemConfigFile, find_repository, find_system, for_each_daemon, store,
    third_party_services,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SYSTEMS: &str = r#"
systems:
  - name: clusterx
    aliases: [nodeb]
    overlays: [overlay-a, overlay-b]
    workers: [worker-0, worker-1]
    rabbits:
      rabbit-1:
        0: compute-01
        1: compute-02
      rabbit-2:
        0: compute-03
    k8sHost: 10.0.0.1
    k8sPort: "6443"
  - name: clustery
    overlays: [overlay-c]
    workers: [worker-2]
    rabbits:
      rabbit-3:
        0: compute-04
"#;

const REPOSITORIES: &str = r#"
repositories:
  - name: storage-operator
    overlays: [storage]
    development: main
    master: releases/v1
  - name: workflow-manager
    development: main
    master: releases/v2
buildConfiguration:
  env:
    - name: IMAGE_TAG_BASE
      value: registry.example.com/cluster
thirdPartyServices:
  - name: object-store
    url: https://store.example.com
    waitCmd: probe --ready
"#;

const DAEMONS: &str = r#"
daemons:
  - name: node-manager
    bin: node-manager
    repository: storage-operator
    path: daemons/node-manager
  - name: data-mover
    bin: data-mover
    repository: workflow-manager
    path: daemons/data-mover
  - name: watchdog
    bin: watchdog
    repository: storage-operator
    path: daemons/watchdog
"#;

fn setup() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let systems = temp.path().join("systems.yaml");
    let repositories = temp.path().join("repositories.yaml");
    let daemons = temp.path().join("daemons.yaml");
    fs::write(&systems, SYSTEMS).unwrap();
    fs::write(&repositories, REPOSITORIES).unwrap();
    fs::write(&daemons, DAEMONS).unwrap();
    (temp, systems, repositories, daemons)
}

#[test]
fn test_resolve_system_by_name_and_alias() {
    let (_temp, systems, _, _) = setup();

    let by_name = find_system("clusterx", &systems).unwrap();
    let by_alias = find_system("nodeb", &systems).unwrap();
    assert_eq!(by_name, by_alias);
    assert_eq!(by_name.computes().count(), 3);
    assert_eq!(by_name.k8s_host.as_deref(), Some("10.0.0.1"));
}

#[test]
fn test_unknown_system_error_names_query_and_path() {
    let (_temp, systems, _, _) = setup();

    let err = find_system("unknown", &systems).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'unknown'"), "got: {message}");
    assert!(message.contains("systems.yaml"), "got: {message}");
}

#[test]
fn test_invalid_topology_fails_lookup() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("systems.yaml");
    fs::write(
        &path,
        r#"
systems:
  - name: clusterx
    aliases: [shared]
    overlays: [a]
    workers: [w]
    rabbits: {r1: {0: c1}}
  - name: clustery
    aliases: [shared]
    overlays: [b]
    workers: [w2]
    rabbits: {r2: {0: c2}}
"#,
    )
    .unwrap();

    // The verification error propagates unchanged through lookup.
    let err = find_system("clusterx", &path).unwrap_err();
    assert!(matches!(err, Error::DuplicateAlias { .. }));
}

#[test]
fn test_repository_lookup_with_build_environment() {
    let (_temp, _, repositories, _) = setup();

    let (repo, build) = find_repository(&repositories, "workflow-manager").unwrap();
    assert_eq!(repo.master, "releases/v2");
    assert_eq!(build.env[0].name, "IMAGE_TAG_BASE");

    let services = third_party_services(&repositories).unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].wait_cmd.as_deref(), Some("probe --ready"));
}

#[test]
fn test_daemon_enumeration_stops_on_failure() {
    let (_temp, _, _, daemons) = setup();

    let mut deployed = Vec::new();
    let err = for_each_daemon(&daemons, |daemon| {
        if daemon.name == "data-mover" {
            return Err(Error::RepositoryNotFound {
                name: daemon.repository.clone(),
                path: PathBuf::from("repositories.yaml"),
            });
        }
        deployed.push(daemon.name.clone());
        Ok(())
    })
    .unwrap_err();

    assert_eq!(deployed, vec!["node-manager"]);
    assert!(matches!(err, Error::RepositoryNotFound { .. }));
}

#[test]
fn test_topology_round_trips_through_store() {
    let (temp, systems, _, _) = setup();

    let original = SystemConfigFile::load(&systems).unwrap();
    let copy_path = temp.path().join("copy.yaml");
    store::save(&copy_path, &original).unwrap();

    let reloaded = SystemConfigFile::load(&copy_path).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_json_topology_loads_like_yaml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("systems.json");
    fs::write(
        &path,
        r#"{
  "systems": [
    {
      "name": "clusterx",
      "overlays": ["a"],
      "workers": ["w"],
      "rabbits": {"r1": {"0": "c1"}}
    }
  ]
}"#,
    )
    .unwrap();

    let system = find_system("clusterx", &path).unwrap();
    assert_eq!(system.computes().collect::<Vec<_>>(), vec!["c1"]);
}
