//! Integration tests for the interactive shell

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{blogdesk_cmd, init_workspace};

#[test]
fn test_shell_session() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    blogdesk_cmd()
        .current_dir(temp.path())
        .arg("shell")
        .write_stdin(
            "login user 123456\n\
             blog create 1111 \"Short Journey\" http://a a@b.c\n\
             use 1111\n\
             blog delete 1111\n\
             post create \"Hello\" \"first line\\nsecond line\"\n\
             post list\n\
             unuse\n\
             post list\n\
             logout\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as user"))
        .stdout(predicate::str::contains("Error: Illegal operation: Cannot delete current blog"))
        .stdout(predicate::str::contains("Created post 1"))
        .stdout(predicate::str::contains("Hello\n\nfirst line\nsecond line"))
        .stdout(predicate::str::contains("Current blog cleared"))
        .stdout(predicate::str::contains("Error: No current blog"))
        .stdout(predicate::str::contains("Logged out"));
}

#[test]
fn test_shell_with_global_login() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    blogdesk_cmd()
        .current_dir(temp.path())
        .args(["--user", "user", "--password", "123456", "shell"])
        .write_stdin("current\nlogin user 123456\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User: user"))
        .stdout(predicate::str::contains("Current blog: none"))
        .stdout(predicate::str::contains("Error: Duplicate login"));
}
