#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn blogdesk_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blogdesk").unwrap();
    cmd.env_remove("BLOGDESK_ROOT");
    cmd.env_remove("BLOGDESK_USER");
    cmd.env_remove("BLOGDESK_PASSWORD");
    cmd.env_remove("BLOGDESK_LOG");
    cmd
}

/// Initialized workspace with user `user` / password `123456`
pub fn init_workspace(root: &Path) {
    blogdesk_cmd().arg("init").arg(root).assert().success();
    blogdesk_cmd()
        .current_dir(root)
        .args(["user", "add", "user", "--password", "123456"])
        .assert()
        .success();
}

/// Command running in `root`, logged in as the workspace user
pub fn logged_in_cmd(root: &Path) -> Command {
    let mut cmd = blogdesk_cmd();
    cmd.current_dir(root)
        .env("BLOGDESK_USER", "user")
        .env("BLOGDESK_PASSWORD", "123456");
    cmd
}
