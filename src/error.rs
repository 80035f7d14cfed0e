//! Error types for collate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for collate
#[derive(Debug, Error)]
pub enum CollateError {
    #[error("Not a site directory: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CollateError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CollateError::NotSiteDirectory(_) => 2,
            CollateError::CollectionNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CollateError::NotSiteDirectory(path) => {
                format!(
                    "Not a site directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'collate init' to create a site.toml here\n\
                    • Navigate to a directory containing site.toml\n\
                    • Set COLLATE_ROOT environment variable to your site path",
                    path.display()
                )
            }
            CollateError::CollectionNotFound(name) => {
                format!(
                    "Collection not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'collate collections' to see registered collections\n\
                    • Add a [[collection]] entry with this name to site.toml",
                    name
                )
            }
            CollateError::Glob(err) => {
                format!(
                    "Invalid glob pattern: {}\n\n\
                    Example: glob = \"2020/*.md\"",
                    err
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CollateError
pub type Result<T> = std::result::Result<T, CollateError>;
