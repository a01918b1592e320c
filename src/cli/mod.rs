//! CLI layer - Command-line interface

pub mod actions;
pub mod commands;
pub mod credentials;
pub mod output;
pub mod shell;

pub use commands::{BlogCommand, Cli, Commands, PostCommand, UserCommand};
pub use output::{format_blog_list, format_post_list};
