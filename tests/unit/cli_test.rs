//! Tests for the coursesync CLI surface

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn coursesync() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("coursesync"))
}

const CONFIG: &str = r#"
[auth]
url = "http://127.0.0.1:9/"
username = "lecturer"
password = "secret"

[course]
root = "course"
unsorted = "unsorted"
svn = "https://svn.example.org/"
ids = "12"
# kept across rewrites
color = "blue"
"#;

fn config(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("coursesync.toml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn test_version() {
    coursesync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coursesync"));
}

#[test]
fn test_help() {
    coursesync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Download student submissions"));
}

#[test]
fn test_no_args_shows_info() {
    coursesync().assert().success().stdout(predicate::str::contains("coursesync"));
}

#[test]
fn test_unreadable_config_exit_code() {
    let temp = TempDir::new().unwrap();
    coursesync()
        .arg("-C")
        .arg(temp.path().join("absent.toml"))
        .arg("tasks")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot load config file"));
}

#[test]
fn test_invalid_config_exit_code() {
    let (_temp, path) = config("[course\nroot = ");
    coursesync().arg("-C").arg(&path).arg("tasks").assert().code(1);
}

#[test]
fn test_missing_course_key_exit_code() {
    let (_temp, path) = config(&CONFIG.replace("unsorted = \"unsorted\"\n", ""));
    coursesync()
        .arg("-C")
        .arg(&path)
        .arg("students")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("course.unsorted"));
}

#[test]
fn test_missing_auth_exit_code() {
    let (_temp, path) = config(&CONFIG.replace("password = \"secret\"\n", ""));
    coursesync()
        .arg("-C")
        .arg(&path)
        .arg("tasks")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("auth.password"));
}

#[test]
fn test_bad_course_ids_exit_code() {
    let (_temp, path) = config(&CONFIG.replace("ids = \"12\"", "ids = \"12,,15\""));
    coursesync().arg("-C").arg(&path).arg("sync").assert().code(3);
}

#[test]
fn test_ask_link_requires_force() {
    let (_temp, path) = config(CONFIG);
    coursesync().arg("-C").arg(&path).args(["sync", "--ask-link"]).assert().failure();
}

#[test]
fn test_link_lifecycle() {
    let (_temp, path) = config(CONFIG);

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["link", "add", "42", "trunk/hw", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked review #42"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("trunk/hw 1"));
    assert!(written.contains("color = \"blue\""));

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42 -> trunk/hw 1"));

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["--json", "link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"links\""));

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["link", "remove", "42"])
        .assert()
        .success();

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["link", "remove", "42"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no link for review #42"));
}

#[test]
fn test_relocate_lifecycle() {
    let (_temp, path) = config(CONFIG);

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["relocate", "add", "old-login", "new-login"])
        .assert()
        .success();

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["relocate", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("old-login -> new-login"));

    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["relocate", "add", "same", "same"])
        .assert()
        .code(4);
}

#[test]
fn test_link_list_empty() {
    let (_temp, path) = config(CONFIG);
    coursesync()
        .arg("-C")
        .arg(&path)
        .args(["link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No links defined."));
}
