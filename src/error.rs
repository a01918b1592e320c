//! Error types for blogdesk

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blogdesk
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Invalid login: {0}")]
    InvalidLogin(String),

    #[error("Duplicate login: {0}")]
    DuplicateLogin(String),

    #[error("Invalid logout: {0}")]
    InvalidLogout(String),

    #[error("Illegal access: {0}")]
    IllegalAccess(String),

    #[error("Illegal operation: {0}")]
    IllegalOperation(String),

    #[error("No current blog: {0}")]
    NoCurrentBlog(String),

    #[error("Not a blogdesk workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed data in {path}: {message}")]
    MalformedData { path: PathBuf, message: String },

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::NotWorkspace(_) => 2,
            BlogError::InvalidLogin(_)
            | BlogError::DuplicateLogin(_)
            | BlogError::InvalidLogout(_) => 3,
            BlogError::IllegalAccess(_) => 4,
            BlogError::IllegalOperation(_) => 5,
            BlogError::NoCurrentBlog(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogError::NotWorkspace(path) => {
                format!(
                    "Not a blogdesk workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'blogdesk init' in this directory to create a workspace\n\
                    • Navigate to an existing blogdesk workspace\n\
                    • Set BLOGDESK_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            BlogError::InvalidLogin(msg) => {
                format!(
                    "Invalid login: {}\n\n\
                    Suggestions:\n\
                    • Check the username and password (both are case-sensitive)\n\
                    • Pass credentials with --user/--password or BLOGDESK_USER/BLOGDESK_PASSWORD\n\
                    • Create an account: blogdesk user add <name>",
                    msg
                )
            }
            BlogError::IllegalAccess(msg) => {
                format!(
                    "Illegal access: {}\n\n\
                    Log in first, e.g. blogdesk --user alice blog list",
                    msg
                )
            }
            BlogError::NoCurrentBlog(msg) => {
                format!(
                    "No current blog: {}\n\n\
                    Suggestions:\n\
                    • Pass the blog id: blogdesk post --blog 1111 list\n\
                    • In the shell, select one first: use 1111",
                    msg
                )
            }
            BlogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: blogdesk config autosave false",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;
