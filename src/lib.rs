//! blogdesk - Blog and post management
//!
//! A single-user session controller over a JSON blog directory and per-blog
//! post records, driven from the command line or an interactive shell.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogError;
