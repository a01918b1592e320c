//! Per-blog post records

use crate::domain::Post;
use crate::error::Result;
use crate::infrastructure::StorePaths;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Storage contract for the posts of a single blog
pub trait PostDao {
    /// Highest post code seen by this store
    fn counter(&self) -> u64;

    fn search_post(&self, code: u64) -> Option<Post>;

    fn create_post(&mut self, post: Post) -> Result<bool>;

    /// Posts whose title or text contains `term` (case-sensitive), oldest first
    fn retrieve_posts(&self, term: &str) -> Vec<Post>;

    /// Returns false when no post has `code`
    fn update_post(&mut self, code: u64, title: &str, text: &str) -> Result<bool>;

    fn delete_post(&mut self, code: u64) -> Result<bool>;

    /// Most recently added first
    fn list_posts(&self) -> Vec<Post>;
}

/// One records file per blog, named `<blog id><extension>` inside the records
/// directory. Posts are kept in insertion order.
#[derive(Debug)]
pub struct FilePostStore {
    blog_id: u64,
    paths: StorePaths,
    posts: Vec<Post>,
    counter: u64,
}

impl FilePostStore {
    pub fn open(paths: &StorePaths, blog_id: u64) -> Self {
        let mut store = FilePostStore {
            blog_id,
            paths: paths.clone(),
            posts: Vec::new(),
            counter: 0,
        };
        if store.paths.autosave {
            store.load();
        }
        store
    }

    pub fn blog_id(&self) -> u64 {
        self.blog_id
    }

    pub fn records_file(&self) -> PathBuf {
        self.paths.records_file(self.blog_id)
    }

    fn load(&mut self) {
        let path = self.records_file();
        let bytes = match fs::read(&path) {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => return,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %e, "cannot read post records, starting empty");
                }
                return;
            }
        };

        match serde_json::from_slice::<Vec<Post>>(&bytes) {
            Ok(posts) => {
                self.counter = posts.iter().map(|post| post.code).max().unwrap_or(0);
                self.posts = posts;
                debug!(blog = self.blog_id, posts = self.posts.len(), "loaded posts");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt post records, starting empty");
                self.posts.clear();
                self.counter = 0;
            }
        }
    }

    fn save(&self) -> Result<()> {
        if !self.paths.autosave {
            return Ok(());
        }

        fs::create_dir_all(&self.paths.records_dir)?;
        let path = self.records_file();
        fs::write(&path, serde_json::to_vec(&self.posts)?)?;
        debug!(blog = self.blog_id, posts = self.posts.len(), "saved posts");
        Ok(())
    }

    /// Move this blog's records file to a new blog id
    pub fn relocate(&mut self, new_blog_id: u64) -> Result<()> {
        let from = self.records_file();

        if self.paths.autosave && from.exists() {
            let to = self.paths.records_file(new_blog_id);
            fs::rename(&from, &to)?;
            debug!(from = %from.display(), to = %to.display(), "relocated post records");
        }

        self.blog_id = new_blog_id;
        Ok(())
    }

    /// Drop every post and remove the records file
    pub fn purge(&mut self) -> Result<()> {
        self.posts.clear();
        self.counter = 0;

        let path = self.records_file();
        if self.paths.autosave && path.exists() {
            fs::remove_file(&path)?;
            debug!(path = %path.display(), "removed post records");
        }
        Ok(())
    }
}

impl PostDao for FilePostStore {
    fn counter(&self) -> u64 {
        self.counter
    }

    fn search_post(&self, code: u64) -> Option<Post> {
        self.posts.iter().find(|post| post.code == code).cloned()
    }

    fn create_post(&mut self, post: Post) -> Result<bool> {
        self.counter = self.counter.max(post.code);
        self.posts.push(post);
        self.save()?;
        Ok(true)
    }

    fn retrieve_posts(&self, term: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.matches(term))
            .cloned()
            .collect()
    }

    fn update_post(&mut self, code: u64, title: &str, text: &str) -> Result<bool> {
        let Some(post) = self.posts.iter_mut().find(|post| post.code == code) else {
            return Ok(false);
        };
        post.update(title, text);
        self.save()?;
        Ok(true)
    }

    fn delete_post(&mut self, code: u64) -> Result<bool> {
        let Some(index) = self.posts.iter().position(|post| post.code == code) else {
            return Ok(false);
        };
        self.posts.remove(index);
        self.save()?;
        Ok(true)
    }

    fn list_posts(&self) -> Vec<Post> {
        self.posts.iter().rev().cloned().collect()
    }
}
