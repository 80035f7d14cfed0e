//! Initialize site use case

use crate::error::{CollateError, Result};
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new site at the specified path with the default site.toml.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    if repo.is_initialized() {
        return Err(CollateError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    let config = Config::default();
    repo.save_config(&config)?;
    info!(path = %path.display(), "initialized site");

    Ok(config)
}
