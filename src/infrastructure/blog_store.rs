//! Blog directory persisted as a JSON array

use crate::domain::Blog;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage contract for the blog directory
pub trait BlogDao {
    fn search_blog(&self, id: u64) -> Option<Blog>;

    /// Returns false when a blog with the same id already exists
    fn create_blog(&mut self, blog: Blog) -> Result<bool>;

    /// Blogs whose name contains `term` (case-sensitive)
    fn retrieve_blogs(&self, term: &str) -> Vec<Blog>;

    /// Replace the record stored under `id`. Returns false when `id` is unknown.
    fn update_blog(&mut self, id: u64, blog: Blog) -> Result<bool>;

    fn delete_blog(&mut self, id: u64) -> Result<bool>;

    /// All blogs in insertion order
    fn list_blogs(&self) -> Vec<Blog>;
}

/// JSON-file implementation of [`BlogDao`].
///
/// With autosave on, the file is read once at construction and rewritten
/// after every successful mutation. With autosave off the store never
/// touches the disk.
#[derive(Debug)]
pub struct JsonBlogStore {
    path: PathBuf,
    autosave: bool,
    blogs: Vec<Blog>,
}

impl JsonBlogStore {
    pub fn open(path: &Path, autosave: bool) -> Self {
        let mut store = JsonBlogStore {
            path: path.to_path_buf(),
            autosave,
            blogs: Vec::new(),
        };
        if autosave {
            store.blogs = Self::load(path);
        }
        store
    }

    fn load(path: &Path) -> Vec<Blog> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %e, "cannot read blogs file, starting empty");
                }
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Blog>>(&contents) {
            Ok(blogs) => {
                debug!(path = %path.display(), blogs = blogs.len(), "loaded blogs");
                blogs
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid blogs file, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self) -> Result<()> {
        if !self.autosave {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.blogs)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), blogs = self.blogs.len(), "saved blogs");
        Ok(())
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.blogs.iter().position(|blog| blog.id == id)
    }
}

impl BlogDao for JsonBlogStore {
    fn search_blog(&self, id: u64) -> Option<Blog> {
        self.blogs.iter().find(|blog| blog.id == id).cloned()
    }

    fn create_blog(&mut self, blog: Blog) -> Result<bool> {
        if self.position(blog.id).is_some() {
            return Ok(false);
        }
        self.blogs.push(blog);
        self.save()?;
        Ok(true)
    }

    fn retrieve_blogs(&self, term: &str) -> Vec<Blog> {
        self.blogs
            .iter()
            .filter(|blog| blog.name.contains(term))
            .cloned()
            .collect()
    }

    fn update_blog(&mut self, id: u64, blog: Blog) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.blogs[index] = blog;
        self.save()?;
        Ok(true)
    }

    fn delete_blog(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.blogs.remove(index);
        self.save()?;
        Ok(true)
    }

    fn list_blogs(&self) -> Vec<Blog> {
        self.blogs.clone()
    }
}
