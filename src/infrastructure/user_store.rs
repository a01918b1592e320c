//! Flat-file credential store (`username,sha256-hex` per line)

use crate::domain::hash_password;
use crate::error::{BlogError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
    users: BTreeMap<String, String>,
}

impl UserStore {
    /// Empty store bound to `path`; nothing is read
    pub fn empty(path: PathBuf) -> Self {
        UserStore {
            path,
            users: BTreeMap::new(),
        }
    }

    /// Load credentials. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let mut store = UserStore::empty(path.to_path_buf());

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "users file not found, starting empty");
                return Ok(store);
            }
            Err(e) => return Err(BlogError::Io(e)),
        };

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (username, hash) = line.split_once(',').ok_or_else(|| BlogError::MalformedData {
                path: path.to_path_buf(),
                message: format!("line {} is not 'username,hash'", index + 1),
            })?;
            store.users.insert(username.to_string(), hash.to_string());
        }

        debug!(path = %path.display(), users = store.users.len(), "loaded users");
        Ok(store)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn password_hash(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    /// Sorted usernames
    pub fn usernames(&self) -> Vec<String> {
        self.users.keys().cloned().collect()
    }

    /// Register a user with a plain-text password (stored hashed)
    pub fn add_user(&mut self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || username.contains(',') || username.contains(char::is_whitespace)
        {
            return Err(BlogError::IllegalOperation(format!(
                "Invalid username: '{}'",
                username
            )));
        }
        if password.is_empty() {
            return Err(BlogError::IllegalOperation(
                "Password cannot be empty".to_string(),
            ));
        }
        if self.contains(username) {
            return Err(BlogError::IllegalOperation(format!(
                "User already exists: {}",
                username
            )));
        }

        self.users
            .insert(username.to_string(), hash_password(password));
        Ok(())
    }

    pub fn remove_user(&mut self, username: &str) -> Result<()> {
        if self.users.remove(username).is_none() {
            return Err(BlogError::IllegalOperation(format!(
                "User not found: {}",
                username
            )));
        }
        Ok(())
    }

    /// Rewrite the whole users file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = String::new();
        for (username, hash) in &self.users {
            contents.push_str(&format!("{},{}\n", username, hash));
        }

        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), users = self.users.len(), "saved users");
        Ok(())
    }
}
