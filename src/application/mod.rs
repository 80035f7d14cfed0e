//! Application layer - Use cases and orchestration

pub mod build;
pub mod init;
pub mod list_collections;
pub mod list_items;

pub use build::{BuildReport, BuildService, Manifest, MANIFEST_FILE};
pub use list_collections::{list_collections, CollectionSummary};
pub use list_items::list_items;
