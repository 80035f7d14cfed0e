//! Domain layer - Content items, date tagging and collections

pub mod collection;
pub mod date_tag;
pub mod item;

pub use collection::{build_collection, Collection, CollectionRegistry, CollectionSpec};
pub use date_tag::{date_from_slug, tag_dates};
pub use item::{slug_for_path, title_from_markdown, url_for_path, ContentItem};
