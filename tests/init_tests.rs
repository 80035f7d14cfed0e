//! Integration tests for the init command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::collate_cmd;

#[test]
fn test_init_creates_site_toml() {
    let temp = TempDir::new().unwrap();

    collate_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized site"));

    let content = fs::read_to_string(temp.path().join("site.toml")).unwrap();
    assert!(content.contains("path_prefix = \"/adventofcode/\""));
    assert!(content.contains("[[collection]]"));
    assert!(content.contains("name = \"aoc2020\""));
    assert!(content.contains("glob = \"2023/*.md\""));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("blog");

    collate_cmd().arg("init").arg(&site).assert().success();

    assert!(site.join("site.toml").is_file());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    collate_cmd().arg("init").arg(temp.path()).assert().success();

    collate_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_site_fail() {
    let temp = TempDir::new().unwrap();

    collate_cmd()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("collate init"));
}

#[test]
fn test_collate_root_env_var() {
    let site = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    collate_cmd().arg("init").arg(site.path()).assert().success();

    collate_cmd()
        .current_dir(elsewhere.path())
        .env("COLLATE_ROOT", site.path())
        .arg("collections")
        .assert()
        .success()
        .stdout(predicate::str::contains("aoc2020"));
}

#[test]
fn test_collate_root_without_config_fails() {
    let temp = TempDir::new().unwrap();

    collate_cmd()
        .env("COLLATE_ROOT", temp.path())
        .arg("collections")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no site.toml found"));
}
