//! Session controller: authentication, current blog, and the guarded blog/post operations

use crate::domain::{verify_password, Blog, Post};
use crate::error::{BlogError, Result};
use crate::infrastructure::{BlogDao, FilePostStore, JsonBlogStore, PostDao, StorePaths, UserStore};
use std::collections::HashMap;
use tracing::{debug, info};

/// Single-user session over the blog and post stores.
///
/// Every blog operation requires a logged-in user; every post operation
/// additionally requires a current blog. The login check always comes first.
/// A blog's post store is opened once and kept for the controller's lifetime.
#[derive(Debug)]
pub struct Controller {
    paths: StorePaths,
    users: UserStore,
    username: Option<String>,
    logged: bool,
    blogs: JsonBlogStore,
    post_stores: HashMap<u64, FilePostStore>,
    current_blog: Option<Blog>,
}

impl Controller {
    pub fn new(paths: StorePaths) -> Result<Self> {
        let users = UserStore::load(&paths.users_file)?;
        let blogs = JsonBlogStore::open(&paths.blogs_file, paths.autosave);

        Ok(Controller {
            paths,
            users,
            username: None,
            logged: false,
            blogs,
            post_stores: HashMap::new(),
            current_blog: None,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if self.logged {
            return Err(BlogError::DuplicateLogin("User already logged in".to_string()));
        }

        let stored = self
            .users
            .password_hash(username)
            .ok_or_else(|| BlogError::InvalidLogin("Invalid username".to_string()))?;

        if !verify_password(password, stored) {
            return Err(BlogError::InvalidLogin("Invalid password".to_string()));
        }

        self.username = Some(username.to_string());
        self.logged = true;
        info!(user = username, "logged in");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        if !self.logged {
            return Err(BlogError::InvalidLogout(
                "No user is currently logged in".to_string(),
            ));
        }

        info!(user = self.username.as_deref().unwrap_or_default(), "logged out");
        self.username = None;
        self.logged = false;
        self.current_blog = None;
        Ok(())
    }

    fn require_login(&self, action: &str) -> Result<()> {
        if self.logged {
            Ok(())
        } else {
            Err(BlogError::IllegalAccess(format!(
                "User must be logged in to {}",
                action
            )))
        }
    }

    fn posts_for(&mut self, id: u64) -> &mut FilePostStore {
        let paths = &self.paths;
        self.post_stores
            .entry(id)
            .or_insert_with(|| FilePostStore::open(paths, id))
    }

    fn take_posts(&mut self, id: u64) -> FilePostStore {
        self.post_stores
            .remove(&id)
            .unwrap_or_else(|| FilePostStore::open(&self.paths, id))
    }

    fn current_posts(&mut self, action: &str) -> Result<&mut FilePostStore> {
        self.require_login(action)?;
        let id = self
            .current_blog
            .as_ref()
            .map(|blog| blog.id)
            .ok_or_else(|| BlogError::NoCurrentBlog("No current blog selected".to_string()))?;
        Ok(self.posts_for(id))
    }

    fn is_current(&self, blog: &Blog) -> bool {
        self.current_blog.as_ref() == Some(blog)
    }

    pub fn search_blog(&self, id: u64) -> Result<Option<Blog>> {
        self.require_login("search blogs")?;
        Ok(self.blogs.search_blog(id))
    }

    pub fn create_blog(&mut self, id: u64, name: &str, url: &str, email: &str) -> Result<Blog> {
        self.require_login("create blogs")?;

        let blog = Blog::new(id, name, url, email);
        if !self.blogs.create_blog(blog.clone())? {
            return Err(BlogError::IllegalOperation("Blog ID already exists".to_string()));
        }
        debug!(blog = id, "created blog");
        Ok(blog)
    }

    pub fn retrieve_blogs(&self, term: &str) -> Result<Vec<Blog>> {
        self.require_login("retrieve blogs")?;
        Ok(self.blogs.retrieve_blogs(term))
    }

    /// Update a blog, possibly changing its id. The current blog cannot be updated.
    pub fn update_blog(
        &mut self,
        original_id: u64,
        id: u64,
        name: &str,
        url: &str,
        email: &str,
    ) -> Result<()> {
        self.require_login("update blogs")?;

        let existing = self
            .blogs
            .search_blog(original_id)
            .ok_or_else(|| BlogError::IllegalOperation("Blog not found".to_string()))?;

        if self.is_current(&existing) {
            return Err(BlogError::IllegalOperation("Cannot update current blog".to_string()));
        }

        let updated = Blog::new(id, name, url, email);

        if original_id != id {
            if self.blogs.search_blog(id).is_some() {
                return Err(BlogError::IllegalOperation(
                    "New blog ID already exists".to_string(),
                ));
            }
            // Records move first; a failed rename leaves the blog untouched
            let mut posts = self.take_posts(original_id);
            if let Err(e) = posts.relocate(id) {
                self.post_stores.insert(original_id, posts);
                return Err(e);
            }
            self.post_stores.insert(id, posts);

            self.blogs.delete_blog(original_id)?;
            self.blogs.create_blog(updated)?;
            debug!(from = original_id, to = id, "renumbered blog");
        } else {
            self.blogs.update_blog(original_id, updated)?;
            debug!(blog = id, "updated blog");
        }

        Ok(())
    }

    /// Delete a blog and its posts. The current blog cannot be deleted.
    pub fn delete_blog(&mut self, id: u64) -> Result<()> {
        self.require_login("delete blogs")?;

        let existing = self
            .blogs
            .search_blog(id)
            .ok_or_else(|| BlogError::IllegalOperation("Blog not found".to_string()))?;

        if self.is_current(&existing) {
            return Err(BlogError::IllegalOperation("Cannot delete current blog".to_string()));
        }

        self.blogs.delete_blog(id)?;
        self.take_posts(id).purge()?;
        debug!(blog = id, "deleted blog");
        Ok(())
    }

    pub fn list_blogs(&self) -> Result<Vec<Blog>> {
        self.require_login("list blogs")?;
        Ok(self.blogs.list_blogs())
    }

    pub fn set_current_blog(&mut self, id: u64) -> Result<()> {
        self.require_login("set current blog")?;

        let blog = self
            .blogs
            .search_blog(id)
            .ok_or_else(|| BlogError::IllegalOperation("Blog not found".to_string()))?;

        self.posts_for(blog.id);
        debug!(blog = id, "current blog set");
        self.current_blog = Some(blog);
        Ok(())
    }

    pub fn get_current_blog(&self) -> Result<Option<Blog>> {
        self.require_login("get current blog")?;
        Ok(self.current_blog.clone())
    }

    pub fn unset_current_blog(&mut self) -> Result<()> {
        self.require_login("unset current blog")?;
        self.current_blog = None;
        Ok(())
    }

    pub fn search_post(&mut self, code: u64) -> Result<Option<Post>> {
        let posts = self.current_posts("search posts")?;
        Ok(posts.search_post(code))
    }

    /// Create a post in the current blog with the next free code
    pub fn create_post(&mut self, title: &str, text: &str) -> Result<Post> {
        let posts = self.current_posts("create posts")?;

        let post = Post::new(posts.counter() + 1, title, text);
        posts.create_post(post.clone())?;
        debug!(blog = posts.blog_id(), post = post.code, "created post");
        Ok(post)
    }

    pub fn retrieve_posts(&mut self, term: &str) -> Result<Vec<Post>> {
        let posts = self.current_posts("retrieve posts")?;
        Ok(posts.retrieve_posts(term))
    }

    /// Returns false when the current blog has no post with `code`
    pub fn update_post(&mut self, code: u64, title: &str, text: &str) -> Result<bool> {
        self.current_posts("update posts")?
            .update_post(code, title, text)
    }

    pub fn delete_post(&mut self, code: u64) -> Result<bool> {
        self.current_posts("delete posts")?.delete_post(code)
    }

    /// Posts of the current blog, most recent first
    pub fn list_posts(&mut self) -> Result<Vec<Post>> {
        let posts = self.current_posts("list posts")?;
        Ok(posts.list_posts())
    }
}
