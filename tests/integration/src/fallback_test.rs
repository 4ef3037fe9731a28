//! Fallback path resolution for the repository document
//!
//! Loading retries one directory up relative to the process working
//! directory. This test changes the process CWD, so it lives alone in its
//! own test binary.

use cluster_config::{RepositoryConfigFile, find_repository};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_falls_back_one_directory_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("repositories.yaml"),
        r#"
repositories:
  - name: repoa
    development: main
    master: releases/v1
"#,
    )
    .unwrap();
    let nested = temp.path().join("nested");
    fs::create_dir(&nested).unwrap();

    std::env::set_current_dir(&nested).unwrap();

    // Not readable at ./repositories.yaml, found at ../repositories.yaml.
    let config = RepositoryConfigFile::load("repositories.yaml").unwrap();
    assert_eq!(config.repositories[0].name, "repoa");

    let (repo, _) = find_repository("repositories.yaml", "repoa").unwrap();
    assert_eq!(repo.development, "main");
}
