//! Blog record

use serde::{Deserialize, Serialize};
use std::fmt;

/// A blog in the blog directory, identified by its numeric id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub email: String,
}

impl Blog {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        url: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Blog {
            id,
            name: name.into(),
            url: url.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Blog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; {}; {}", self.id, self.name, self.url, self.email)
    }
}
