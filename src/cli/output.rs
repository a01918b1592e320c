//! Output formatting utilities

use crate::domain::{Blog, Post};

const POST_SEPARATOR: &str = "\n----\n";

/// Format a list of blogs, one per line
pub fn format_blog_list(blogs: &[Blog]) -> String {
    if blogs.is_empty() {
        return "No blogs found".to_string();
    }

    let mut output = String::new();
    for blog in blogs {
        output.push_str(&format!("{}\n", blog));
    }
    output
}

/// Format a list of posts separated by rule lines
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let rendered: Vec<String> = posts.iter().map(|post| post.to_string()).collect();
    format!("{}\n", rendered.join(POST_SEPARATOR))
}
