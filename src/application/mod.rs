//! Application layer - Use cases and orchestration

pub mod controller;
pub mod init;
pub mod manage_config;
pub mod manage_users;

pub use controller::Controller;
pub use manage_config::ConfigService;
pub use manage_users::UserService;
