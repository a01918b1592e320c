//! Blog and post commands executed against a controller session

use crate::application::Controller;
use crate::cli::commands::{BlogCommand, PostCommand};
use crate::cli::output::{format_blog_list, format_post_list};
use crate::error::{BlogError, Result};

/// Run a blog command and return the text to print
pub fn run_blog_command(controller: &mut Controller, command: &BlogCommand) -> Result<String> {
    match command {
        BlogCommand::List => Ok(as_lines(format_blog_list(&controller.list_blogs()?))),
        BlogCommand::Search { id } => match controller.search_blog(*id)? {
            Some(blog) => Ok(format!("{}\n", blog)),
            None => Ok(format!("No blog with id {}\n", id)),
        },
        BlogCommand::Find { term } => Ok(as_lines(format_blog_list(&controller.retrieve_blogs(term)?))),
        BlogCommand::Create {
            id,
            name,
            url,
            email,
        } => {
            let blog = controller.create_blog(*id, name, url, email)?;
            Ok(format!("Created blog {}\n", blog))
        }
        BlogCommand::Update {
            original_id,
            id,
            name,
            url,
            email,
        } => {
            controller.update_blog(*original_id, *id, name, url, email)?;
            Ok(format!("Updated blog {}\n", id))
        }
        BlogCommand::Delete { id } => {
            controller.delete_blog(*id)?;
            Ok(format!("Deleted blog {}\n", id))
        }
    }
}

/// Run a post command against the current blog and return the text to print
pub fn run_post_command(controller: &mut Controller, command: &PostCommand) -> Result<String> {
    match command {
        PostCommand::List => Ok(as_lines(format_post_list(&controller.list_posts()?))),
        PostCommand::Search { code } => match controller.search_post(*code)? {
            Some(post) => Ok(format!("{}\n", post)),
            None => Ok(format!("No post with code {}\n", code)),
        },
        PostCommand::Find { term } => Ok(as_lines(format_post_list(&controller.retrieve_posts(term)?))),
        PostCommand::Create { title, text } => {
            let post = controller.create_post(title, text)?;
            Ok(format!("Created post {}\n", post.code))
        }
        PostCommand::Update { code, title, text } => {
            if !controller.update_post(*code, title, text)? {
                return Err(post_not_found(*code));
            }
            Ok(format!("Updated post {}\n", code))
        }
        PostCommand::Delete { code } => {
            if !controller.delete_post(*code)? {
                return Err(post_not_found(*code));
            }
            Ok(format!("Deleted post {}\n", code))
        }
    }
}

fn as_lines(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn post_not_found(code: u64) -> BlogError {
    BlogError::IllegalOperation(format!("Post not found: {}", code))
}
