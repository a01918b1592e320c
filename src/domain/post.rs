//! Post record and its edit semantics

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A post inside a blog. `code` is unique within its blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub code: u64,
    pub title: String,
    pub text: String,
    pub creation_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
}

impl Post {
    /// Create a post stamped with the current local time
    pub fn new(code: u64, title: impl Into<String>, text: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        Post {
            code,
            title: title.into(),
            text: text.into(),
            creation_time: now,
            update_time: now,
        }
    }

    /// Replace title and text, refreshing `update_time`
    pub fn update(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.title = title.into();
        self.text = text.into();
        self.update_time = Local::now().naive_local();
    }

    /// Case-sensitive substring match on title or text
    pub fn matches(&self, term: &str) -> bool {
        self.title.contains(term) || self.text.contains(term)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; {}\n{}\n\n{}",
            self.code,
            self.creation_time.format(TIMESTAMP_FORMAT),
            self.update_time.format(TIMESTAMP_FORMAT),
            self.title,
            self.text
        )
    }
}
