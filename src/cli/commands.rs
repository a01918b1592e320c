//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogdesk")]
#[command(about = "Manage blogs and their posts from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// User to log in as
    #[arg(short, long, global = true, env = "BLOGDESK_USER")]
    pub user: Option<String>,

    /// Password for --user (prompted for when omitted on a terminal)
    #[arg(short, long, global = true, env = "BLOGDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Keep all changes in memory only
        #[arg(long)]
        no_autosave: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Manage blogs (requires login)
    Blog {
        #[command(subcommand)]
        command: BlogCommand,
    },

    /// Manage the posts of one blog (requires login)
    Post {
        /// Blog the posts belong to
        #[arg(short, long)]
        blog: u64,

        #[command(subcommand)]
        command: PostCommand,
    },

    /// Interactive session reading commands from stdin
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Add a user (password from --password, BLOGDESK_PASSWORD or a prompt)
    Add { username: String },

    /// Remove a user
    Remove { username: String },

    /// List usernames
    List,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BlogCommand {
    /// List all blogs
    List,

    /// Show the blog with the given id
    Search { id: u64 },

    /// Blogs whose name contains TERM (case-sensitive)
    Find { term: String },

    /// Create a blog
    Create {
        id: u64,
        name: String,
        url: String,
        email: String,
    },

    /// Update a blog, optionally changing its id
    Update {
        original_id: u64,
        id: u64,
        name: String,
        url: String,
        email: String,
    },

    /// Delete a blog and its posts
    Delete { id: u64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PostCommand {
    /// List posts, most recent first
    List,

    /// Show the post with the given code
    Search { code: u64 },

    /// Posts whose title or text contains TERM (case-sensitive)
    Find { term: String },

    /// Create a post
    Create { title: String, text: String },

    /// Replace the title and text of a post
    Update {
        code: u64,
        title: String,
        text: String,
    },

    /// Delete a post
    Delete { code: u64 },
}
