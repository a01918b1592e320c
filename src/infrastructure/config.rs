//! Configuration management

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const WORKSPACE_DIR: &str = ".blogdesk";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub autosave: bool,
    pub users_file: PathBuf,
    pub blogs_file: PathBuf,
    pub records_dir: PathBuf,
    pub records_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            autosave: true,
            users_file: PathBuf::from("users.txt"),
            blogs_file: PathBuf::from("blogs.json"),
            records_dir: PathBuf::from("records"),
            records_extension: ".dat".to_string(),
        }
    }
}

/// Concrete file locations the stores read and write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub autosave: bool,
    pub users_file: PathBuf,
    pub blogs_file: PathBuf,
    pub records_dir: PathBuf,
    pub records_extension: String,
}

impl StorePaths {
    /// Records file holding the posts of one blog
    pub fn records_file(&self, blog_id: u64) -> PathBuf {
        self.records_dir
            .join(format!("{}{}", blog_id, self.records_extension))
    }
}

impl Config {
    /// Load config from .blogdesk/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogError::NotWorkspace(path.to_path_buf())
            } else {
                BlogError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .blogdesk/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join(CONFIG_FILE);

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve configured locations against the workspace root
    pub fn store_paths(&self, root: &Path) -> StorePaths {
        StorePaths {
            autosave: self.autosave,
            users_file: root.join(&self.users_file),
            blogs_file: root.join(&self.blogs_file),
            records_dir: root.join(&self.records_dir),
            records_extension: self.records_extension.clone(),
        }
    }
}
