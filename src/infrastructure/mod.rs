//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{Config, DirConfig};
pub use repository::{FileSystemRepository, SiteRepository};
