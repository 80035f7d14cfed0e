//! Site build use case
//!
//! Runs every registered collection over the scanned content, copies
//! passthrough files, prepares bundle directories and writes the manifest.

use crate::domain::Collection;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Manifest file written to the output directory
pub const MANIFEST_FILE: &str = "collections.toml";

/// Collections handed to downstream templating and feeds.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// RFC 3339 UTC with millisecond precision
    pub build_date: String,
    pub path_prefix: String,
    #[serde(rename = "collection")]
    pub collections: Vec<Collection>,
}

/// What a build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// (name, items, dated items) per collection, in registration order
    pub collections: Vec<(String, usize, usize)>,
    pub files_copied: usize,
    pub bundles: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Service for building a site's collections
pub struct BuildService {
    repository: FileSystemRepository,
}

impl BuildService {
    pub fn new(repository: FileSystemRepository) -> Self {
        BuildService { repository }
    }

    /// Build the site, stamping the manifest with the current time.
    pub fn execute(&self) -> Result<BuildReport> {
        self.execute_at(Utc::now())
    }

    /// Build the site with an explicit build date.
    pub fn execute_at(&self, build_date: DateTime<Utc>) -> Result<BuildReport> {
        // 1. Config and registrations
        let config = self.repository.load_config()?;
        let registry = config.registry()?;

        // 2. Content
        let items = self.repository.scan_content(&config)?;

        // 3. Collections
        let collections = registry.build_all(&items);

        // 4. Passthrough copies
        let mut files_copied = 0;
        for rel in &config.passthrough {
            files_copied += self.repository.copy_passthrough(&config, rel)?;
        }

        // 5. Bundles
        let bundles = config
            .bundles
            .iter()
            .map(|name| self.repository.create_bundle_dir(&config, name))
            .collect::<Result<Vec<_>>>()?;

        // 6. Manifest
        let summary = collections
            .iter()
            .map(|c| (c.name.clone(), c.items.len(), c.dated_count()))
            .collect();
        let manifest = Manifest {
            build_date: build_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            path_prefix: config.path_prefix.clone(),
            collections,
        };
        let contents = toml::to_string_pretty(&manifest)?;
        let manifest_path = self
            .repository
            .write_output(&config, MANIFEST_FILE, &contents)?;

        info!(
            root = %self.repository.root().display(),
            manifest = %manifest_path.display(),
            files_copied,
            "build complete"
        );

        Ok(BuildReport {
            collections: summary,
            files_copied,
            bundles,
            manifest: manifest_path,
        })
    }
}
