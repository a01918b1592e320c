//! Infrastructure layer - External I/O and persistence

pub mod blog_store;
pub mod config;
pub mod post_store;
pub mod repository;
pub mod user_store;

pub use blog_store::{BlogDao, JsonBlogStore};
pub use config::{Config, StorePaths};
pub use post_store::{FilePostStore, PostDao};
pub use repository::{FileSystemRepository, WorkspaceRepository};
pub use user_store::UserStore;
