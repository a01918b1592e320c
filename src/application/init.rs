//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Initialize a new blogdesk workspace at the specified path.
pub fn init(path: &Path, autosave: bool) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config {
        autosave,
        ..Config::default()
    };
    repo.save_config(&config)?;

    println!("Initialized blogdesk workspace at {}", path.display());
    if !autosave {
        println!("Autosave: off (changes are not written to disk)");
    }

    Ok(())
}
