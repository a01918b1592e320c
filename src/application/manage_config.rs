//! Config management use case

use crate::error::{BlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::path::PathBuf;

const KEYS: &str = "autosave, users_file, blogs_file, records_dir, records_extension";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "autosave" => Ok(config.autosave.to_string()),
            "users_file" => Ok(config.users_file.display().to_string()),
            "blogs_file" => Ok(config.blogs_file.display().to_string()),
            "records_dir" => Ok(config.records_dir.display().to_string()),
            "records_extension" => Ok(config.records_extension),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "autosave" => {
                config.autosave = value.parse().map_err(|_| {
                    BlogError::Config(format!(
                        "Invalid value for autosave: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "users_file" => config.users_file = non_empty_path(key, value)?,
            "blogs_file" => config.blogs_file = non_empty_path(key, value)?,
            "records_dir" => config.records_dir = non_empty_path(key, value)?,
            "records_extension" => {
                if !value.starts_with('.') || value.len() < 2 || value.contains(['/', '\\']) {
                    return Err(BlogError::Config(format!(
                        "Invalid records extension: '{}'. Expected something like .dat",
                        value
                    )));
                }
                config.records_extension = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> BlogError {
    BlogError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, KEYS
    ))
}

fn non_empty_path(key: &str, value: &str) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(BlogError::Config(format!("{} cannot be empty", key)));
    }
    Ok(PathBuf::from(value))
}
