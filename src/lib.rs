//! collate - Static-site collection builder
//!
//! Scans a site's Markdown content, assembles named glob-selected
//! collections, dates each item from its filename slug, and writes a
//! collection manifest for downstream templating and feeds.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CollateError;
