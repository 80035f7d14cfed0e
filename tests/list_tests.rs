//! Integration tests for the list and collections commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{collate_cmd, write_file};

fn init_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    collate_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_list_empty_collection() {
    let temp = init_site();

    collate_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("aoc2020")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found"));
}

#[test]
fn test_list_sorted_newest_first() {
    let temp = init_site();
    write_file(temp.path(), "2020/2020-12-1-report-repair.md", "# Report Repair\n");
    write_file(temp.path(), "2020/2020-12-10-adapter-array.md", "x");
    write_file(temp.path(), "2020/2020-12-2-password-philosophy.md", "x");
    write_file(temp.path(), "2020/readme.md", "x");

    let output = collate_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("aoc2020")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("2020-12-10  2020-12-10-adapter-array"));
    assert!(lines[1].starts_with("2020-12-02"));
    assert!(lines[2].starts_with("2020-12-01  Report Repair"));
    assert!(lines[3].contains("readme  /adventofcode/2020/readme/"));
}

#[test]
fn test_list_with_limit() {
    let temp = init_site();
    write_file(temp.path(), "2023/2023-12-1-trebuchet.md", "x");
    write_file(temp.path(), "2023/2023-12-2-cube-conundrum.md", "x");

    let output = collate_cmd()
        .current_dir(temp.path())
        .args(["list", "aoc2023", "--limit", "1"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("cube-conundrum"));
}

#[test]
fn test_list_unknown_collection() {
    let temp = init_site();

    collate_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("aoc1999")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("collate collections"));
}

#[test]
fn test_collections_summary() {
    let temp = init_site();
    write_file(temp.path(), "2021/2021-12-1-sonar-sweep.md", "x");
    write_file(temp.path(), "2021/index.md", "x");

    collate_cmd()
        .current_dir(temp.path())
        .arg("collections")
        .assert()
        .success()
        .stdout(predicate::str::contains("aoc2020  2020/*.md  (0 items, 0 dated)"))
        .stdout(predicate::str::contains("aoc2021  2021/*.md  (2 items, 1 dated)"))
        .stdout(predicate::str::contains("aoc2023"));
}
