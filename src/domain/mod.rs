//! Domain layer - Business logic and domain models

pub mod blog;
pub mod credentials;
pub mod post;

pub use blog::Blog;
pub use credentials::{hash_password, verify_password};
pub use post::Post;
