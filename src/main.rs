use blogdesk::application::{init::init, ConfigService, Controller, UserService};
use blogdesk::cli::actions::{run_blog_command, run_post_command};
use blogdesk::cli::credentials::{resolve_new_password, resolve_password};
use blogdesk::cli::{shell, Cli, Commands, UserCommand};
use blogdesk::error::Result;
use blogdesk::infrastructure::FileSystemRepository;
use clap::Parser;
use std::io::{self, IsTerminal};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_env("BLOGDESK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Open the discovered workspace and log in when a user was given
fn open_session(cli: &Cli) -> Result<Controller> {
    let repo = FileSystemRepository::discover()?;
    let mut controller = Controller::new(repo.store_paths()?)?;

    if let Some(user) = &cli.user {
        let password = resolve_password(cli.password.as_deref(), user)?;
        controller.login(user, &password)?;
    }

    Ok(controller)
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init { path, no_autosave } => init(path, !no_autosave),
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if *list {
                let config = service.list()?;
                println!("autosave = {}", config.autosave);
                println!("users_file = {}", config.users_file.display());
                println!("blogs_file = {}", config.blogs_file.display());
                println!("records_dir = {}", config.records_dir.display());
                println!("records_extension = {}", config.records_extension);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(k, v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(k)?);
                }
                Ok(())
            } else {
                println!("Usage: blogdesk config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: autosave, users_file, blogs_file, records_dir, records_extension"
                );
                Ok(())
            }
        }
        Commands::User { command } => {
            let repo = FileSystemRepository::discover()?;
            let mut service = UserService::open(&repo.store_paths()?)?;

            match command {
                UserCommand::Add { username } => {
                    let password = resolve_new_password(cli.password.as_deref(), username)?;
                    service.add(username, &password)?;
                    println!("Added user {}", username);
                }
                UserCommand::Remove { username } => {
                    service.remove(username)?;
                    println!("Removed user {}", username);
                }
                UserCommand::List => {
                    let users = service.list();
                    if users.is_empty() {
                        println!("No users found");
                    }
                    for user in users {
                        println!("{}", user);
                    }
                }
            }
            Ok(())
        }
        Commands::Blog { command } => {
            let mut controller = open_session(cli)?;
            print!("{}", run_blog_command(&mut controller, command)?);
            Ok(())
        }
        Commands::Post { blog, command } => {
            let mut controller = open_session(cli)?;
            controller.set_current_blog(*blog)?;
            print!("{}", run_post_command(&mut controller, command)?);
            Ok(())
        }
        Commands::Shell => {
            let mut controller = open_session(cli)?;
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut stdout = io::stdout();
            shell::run(&mut controller, stdin.lock(), &mut stdout, interactive)
        }
    }
}
