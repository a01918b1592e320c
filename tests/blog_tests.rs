//! Integration tests for blog commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{blogdesk_cmd, init_workspace, logged_in_cmd};

fn create_blog(root: &std::path::Path, id: &str, name: &str) {
    logged_in_cmd(root)
        .args(["blog", "create", id, name, "http://blogs.example", "owner@example.com"])
        .assert()
        .success();
}

#[test]
fn test_blog_commands_require_login() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["blog", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("User must be logged in to list blogs"));
}

#[test]
fn test_wrong_password_is_rejected() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["--user", "user", "--password", "nope", "blog", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid password"));

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["--user", "ghost", "--password", "123456", "blog", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid username"));
}

#[test]
fn test_missing_password_without_terminal() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["--user", "user", "blog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BLOGDESK_PASSWORD"));
}

#[test]
fn test_create_and_list_blogs() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    logged_in_cmd(temp.path())
        .args(["blog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No blogs found"));

    logged_in_cmd(temp.path())
        .args([
            "blog",
            "create",
            "1111114444",
            "Short Journey",
            "http://notamazon.com/short_journey",
            "short.journey@gmail.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created blog 1111114444; Short Journey; http://notamazon.com/short_journey; short.journey@gmail.com",
        ));
    create_blog(temp.path(), "1111114445", "Long Journey");

    logged_in_cmd(temp.path())
        .args(["blog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1111114444; Short Journey"))
        .stdout(predicate::str::contains("1111114445; Long Journey"));

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("blogs.json")).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 2);
    assert_eq!(raw[0]["email"], "short.journey@gmail.com");
}

#[test]
fn test_create_duplicate_blog_fails() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    create_blog(temp.path(), "1", "One");

    logged_in_cmd(temp.path())
        .args(["blog", "create", "1", "Again", "http://a", "a@b.c"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Blog ID already exists"));
}

#[test]
fn test_search_and_find() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    create_blog(temp.path(), "1", "Short Journey");
    create_blog(temp.path(), "2", "Long Journey");
    create_blog(temp.path(), "3", "Cooking");

    logged_in_cmd(temp.path())
        .args(["blog", "search", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3; Cooking"));

    logged_in_cmd(temp.path())
        .args(["blog", "search", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No blog with id 9"));

    logged_in_cmd(temp.path())
        .args(["blog", "find", "Journey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Short Journey"))
        .stdout(predicate::str::contains("Long Journey"))
        .stdout(predicate::str::contains("Cooking").not());

    logged_in_cmd(temp.path())
        .args(["blog", "find", "journey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No blogs found"));
}

#[test]
fn test_update_blog_in_place_and_with_new_id() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    create_blog(temp.path(), "1", "One");
    create_blog(temp.path(), "2", "Two");

    logged_in_cmd(temp.path())
        .args(["blog", "update", "1", "1", "Uno", "http://uno", "uno@example.com"])
        .assert()
        .success();

    logged_in_cmd(temp.path())
        .args(["blog", "update", "1", "2", "Uno", "http://uno", "uno@example.com"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("New blog ID already exists"));

    logged_in_cmd(temp.path())
        .args(["blog", "update", "1", "7", "Siete", "http://siete", "siete@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated blog 7"));

    logged_in_cmd(temp.path())
        .args(["blog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7; Siete"))
        .stdout(predicate::str::contains("1; Uno").not());

    logged_in_cmd(temp.path())
        .args(["blog", "update", "42", "42", "x", "y", "z"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Blog not found"));
}

#[test]
fn test_delete_blog() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    create_blog(temp.path(), "1", "One");

    logged_in_cmd(temp.path())
        .args(["blog", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted blog 1"));

    logged_in_cmd(temp.path())
        .args(["blog", "delete", "1"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Blog not found"));
}

#[test]
fn test_no_autosave_keeps_nothing() {
    let temp = TempDir::new().unwrap();
    blogdesk_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--no-autosave")
        .assert()
        .success();
    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["user", "add", "user", "--password", "123456"])
        .assert()
        .success();

    create_blog(temp.path(), "1", "One");
    assert!(!temp.path().join("blogs.json").exists());

    logged_in_cmd(temp.path())
        .args(["blog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No blogs found"));
}
