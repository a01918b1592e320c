//! Interactive session: one controller, many commands read line by line

use crate::application::Controller;
use crate::cli::actions::{run_blog_command, run_post_command};
use crate::cli::commands::{BlogCommand, PostCommand};
use crate::cli::credentials::resolve_password;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "blogdesk> ";

#[derive(Parser, Debug)]
#[command(name = "blogdesk", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Log in (password is prompted for when omitted)
    Login {
        username: String,
        password: Option<String>,
    },

    /// Log out and clear the current blog
    Logout,

    /// Select the current blog for post commands
    Use { id: u64 },

    /// Clear the current blog
    Unuse,

    /// Show the logged-in user and current blog
    Current,

    /// Blog commands
    Blog {
        #[command(subcommand)]
        command: BlogCommand,
    },

    /// Post commands on the current blog
    Post {
        #[command(subcommand)]
        command: PostCommand,
    },

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

enum Step {
    Print(String),
    Exit,
}

/// Read commands from `input` until EOF or `exit`, writing results and errors to `output`.
/// Errors from individual commands never end the session.
pub fn run<R: BufRead, W: Write>(
    controller: &mut Controller,
    mut input: R,
    output: &mut W,
    interactive: bool,
) -> Result<()> {
    let mut line = String::new();

    loop {
        if interactive {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let words = match split_words(trimmed) {
            Ok(words) => words,
            Err(message) => {
                writeln!(output, "Error: {}", message)?;
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(output, "{}", err)?;
                continue;
            }
        };

        if let Some(name) = words.first() {
            debug!(command = %name, "shell command");
        }
        match execute(controller, parsed.command) {
            Ok(Step::Print(text)) => write!(output, "{}", text)?,
            Ok(Step::Exit) => break,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }

    Ok(())
}

fn execute(controller: &mut Controller, command: ShellCommand) -> Result<Step> {
    let text = match command {
        ShellCommand::Login { username, password } => {
            let password = resolve_password(password.as_deref(), &username)?;
            controller.login(&username, &password)?;
            format!("Logged in as {}\n", username)
        }
        ShellCommand::Logout => {
            controller.logout()?;
            "Logged out\n".to_string()
        }
        ShellCommand::Use { id } => {
            controller.set_current_blog(id)?;
            format!("Current blog: {}\n", id)
        }
        ShellCommand::Unuse => {
            controller.unset_current_blog()?;
            "Current blog cleared\n".to_string()
        }
        ShellCommand::Current => match controller.username() {
            Some(username) => {
                let blog = controller
                    .get_current_blog()?
                    .map(|blog| blog.to_string())
                    .unwrap_or_else(|| "none".to_string());
                format!("User: {}\nCurrent blog: {}\n", username, blog)
            }
            None => "Not logged in\n".to_string(),
        },
        ShellCommand::Blog { command } => run_blog_command(controller, &command)?,
        ShellCommand::Post { command } => run_post_command(controller, &command)?,
        ShellCommand::Exit => return Ok(Step::Exit),
    };

    Ok(Step::Print(text))
}

/// Split a command line into words. Single quotes are literal; double quotes
/// allow `\n`, `\t` and backslash escapes; a bare backslash escapes the next character.
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => match chars.next() {
                Some('n') => current.push('\n'),
                Some('t') => current.push('\t'),
                Some(next) => current.push(next),
                None => return Err("trailing backslash".to_string()),
            },
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => match chars.next() {
                    Some(next) => {
                        current.push(next);
                        in_word = true;
                    }
                    None => return Err("trailing backslash".to_string()),
                },
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
