//! Resolving passwords from flags, environment, or an interactive prompt

use crate::error::{BlogError, Result};
use dialoguer::Password;
use std::io::{self, IsTerminal};

/// Password given on the command line / environment, else prompted for on a terminal
pub fn resolve_password(given: Option<&str>, username: &str) -> Result<String> {
    if let Some(password) = given {
        return Ok(password.to_string());
    }

    if !io::stdin().is_terminal() {
        return Err(BlogError::Prompt(format!(
            "No password for '{}': use --password or BLOGDESK_PASSWORD",
            username
        )));
    }

    Password::new()
        .with_prompt(format!("Password for {}", username))
        .interact()
        .map_err(|e| BlogError::Prompt(e.to_string()))
}

/// Like [`resolve_password`], but a prompted password must be typed twice
pub fn resolve_new_password(given: Option<&str>, username: &str) -> Result<String> {
    if let Some(password) = given {
        return Ok(password.to_string());
    }

    if !io::stdin().is_terminal() {
        return Err(BlogError::Prompt(format!(
            "No password for new user '{}': use --password or BLOGDESK_PASSWORD",
            username
        )));
    }

    Password::new()
        .with_prompt(format!("New password for {}", username))
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| BlogError::Prompt(e.to_string()))
}
