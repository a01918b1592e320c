//! Integration tests for init, config and user commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{blogdesk_cmd, init_workspace};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    blogdesk_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized blogdesk workspace"));

    let config_path = temp.path().join(".blogdesk/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("autosave = true"));
    assert!(content.contains("blogs_file = \"blogs.json\""));
    assert!(content.contains("records_extension = \".dat\""));
}

#[test]
fn test_init_without_autosave() {
    let temp = TempDir::new().unwrap();

    blogdesk_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--no-autosave")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".blogdesk/config.toml")).unwrap();
    assert!(content.contains("autosave = false"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    blogdesk_cmd().arg("init").arg(temp.path()).assert().success();
    blogdesk_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    blogdesk_cmd().arg("init").arg(temp.path()).assert().success();

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["config", "records_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records"));

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["config", "records_dir", "posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set records_dir = posts"));

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records_dir = posts"))
        .stdout(predicate::str::contains("autosave = true"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    blogdesk_cmd().arg("init").arg(temp.path()).assert().success();

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_blogdesk_root_without_workspace_fails() {
    let temp = TempDir::new().unwrap();

    blogdesk_cmd()
        .env("BLOGDESK_ROOT", temp.path())
        .args(["blog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BLOGDESK_ROOT"));
}

#[test]
fn test_outside_workspace_fails_with_exit_code_2() {
    let temp = TempDir::new().unwrap();

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["blog", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blogdesk init"));
}

#[test]
fn test_blogdesk_root_env_is_used() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_workspace(temp.path());

    blogdesk_cmd()
        .current_dir(elsewhere.path())
        .env("BLOGDESK_ROOT", temp.path())
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user"));
}

#[test]
fn test_user_add_writes_hashed_password() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let users = fs::read_to_string(temp.path().join("users.txt")).unwrap();
    assert_eq!(
        users,
        "user,8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92\n"
    );
}

#[test]
fn test_user_add_duplicate_and_remove() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["user", "add", "user", "--password", "other"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("User already exists"));

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["user", "remove", "user"])
        .assert()
        .success();

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found"));
}

#[test]
fn test_user_add_without_password_on_pipe_fails() {
    let temp = TempDir::new().unwrap();
    blogdesk_cmd().arg("init").arg(temp.path()).assert().success();

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["user", "add", "ali"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BLOGDESK_PASSWORD"));
}
