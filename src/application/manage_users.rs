//! User account management use case

use crate::error::Result;
use crate::infrastructure::{StorePaths, UserStore};

/// Service for maintaining the credential file
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn open(paths: &StorePaths) -> Result<Self> {
        Ok(UserService {
            store: UserStore::load(&paths.users_file)?,
        })
    }

    pub fn add(&mut self, username: &str, password: &str) -> Result<()> {
        self.store.add_user(username, password)?;
        self.store.save()
    }

    pub fn remove(&mut self, username: &str) -> Result<()> {
        self.store.remove_user(username)?;
        self.store.save()
    }

    pub fn list(&self) -> Vec<String> {
        self.store.usernames()
    }
}
