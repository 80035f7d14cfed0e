//! File system repository

use crate::domain::{title_from_markdown, ContentItem};
use crate::error::{CollateError, Result};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from site.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to site.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if site.toml exists
    fn is_initialized(&self) -> bool;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the site root by walking up from the current directory.
    /// COLLATE_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("COLLATE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(CollateError::Config(format!(
                    "COLLATE_ROOT is set to '{}' but no site.toml found. \
                    Run 'collate init' in that directory or unset COLLATE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(CollateError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }
}

// Content operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    pub fn input_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.dir.input)
    }

    pub fn output_dir(&self, config: &Config) -> PathBuf {
        self.input_dir(config).join(&config.dir.output)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// Scan the input directory for Markdown content, sorted by input path.
    ///
    /// Hidden directories and the output, includes, layouts and data
    /// directories are skipped.
    pub fn scan_content(&self, config: &Config) -> Result<Vec<ContentItem>> {
        let input = self.input_dir(config);
        if !input.is_dir() {
            return Err(CollateError::Config(format!(
                "Input directory does not exist: {}",
                input.display()
            )));
        }

        let excluded: Vec<PathBuf> = [
            &config.dir.output,
            &config.dir.includes,
            &config.dir.layouts,
            &config.dir.data,
        ]
        .iter()
        .map(|dir| input.join(dir))
        .collect();

        let walker = WalkDir::new(&input)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let hidden = entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with('.'));
                !hidden && !excluded.iter().any(|dir| entry.path() == dir)
            });

        let mut items = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&input) else {
                continue;
            };
            let Some(input_path) = Self::normalize_relative_path(rel) else {
                warn!(path = %entry.path().display(), "skipping non UTF-8 path");
                continue;
            };

            let bytes = fs::read(entry.path())?;
            let content = String::from_utf8_lossy(&bytes);
            if matches!(content, Cow::Owned(_)) {
                warn!(path = %input_path, "invalid UTF-8, title read lossily");
            }
            let item = ContentItem::new(&input_path, &config.path_prefix)
                .with_title(title_from_markdown(&content));
            debug!(path = %input_path, slug = item.slug(), "scanned item");
            items.push(item);
        }

        items.sort_by(|a, b| a.input_path().cmp(b.input_path()));
        info!(count = items.len(), input = %input.display(), "scanned content");
        Ok(items)
    }

    /// Copy a passthrough file or directory from the input dir into the
    /// output dir at the same relative path. Returns the number of files
    /// copied; a missing source copies nothing.
    ///
    /// When the source directory contains the output dir or the destination,
    /// those subtrees are not copied again.
    pub fn copy_passthrough(&self, config: &Config, rel: &Path) -> Result<usize> {
        let source = self.input_dir(config).join(rel);
        let output = self.output_dir(config);
        let destination = output.join(rel);

        if !source.exists() {
            warn!(path = %rel.display(), "passthrough source not found");
            return Ok(0);
        }

        if source.is_file() {
            return Self::copy_file(&source, &destination);
        }

        let mut copied = 0;
        let walker = WalkDir::new(&source).into_iter().filter_entry(|entry| {
            entry.depth() == 0 || (entry.path() != destination && entry.path() != output)
        });
        for entry in walker {
            let entry = entry.map_err(|e| CollateError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(inner) = entry.path().strip_prefix(&source) else {
                continue;
            };
            copied += Self::copy_file(entry.path(), &destination.join(inner))?;
        }
        Ok(copied)
    }

    fn copy_file(source: &Path, destination: &Path) -> Result<usize> {
        // Copying a file onto itself would truncate it.
        if let (Ok(a), Ok(b)) = (source.canonicalize(), destination.canonicalize()) {
            if a == b {
                debug!(path = %source.display(), "passthrough already in place");
                return Ok(0);
            }
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, destination)?;
        debug!(from = %source.display(), to = %destination.display(), "copied");
        Ok(1)
    }

    /// Create the output directory for a named asset bundle.
    pub fn create_bundle_dir(&self, config: &Config, name: &str) -> Result<PathBuf> {
        let path = self.output_dir(config).join("bundles").join(name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Write a file relative to the output directory, creating parents.
    pub fn write_output(&self, config: &Config, rel: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir(config).join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }
}
