//! List collection items use case

use crate::domain::ContentItem;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::cmp::Ordering;

/// List the items of one collection, newest first.
///
/// Dated items come before undated ones; undated items are ordered by
/// input path.
pub fn list_items(
    repository: &FileSystemRepository,
    collection: &str,
    limit: Option<usize>,
) -> Result<Vec<ContentItem>> {
    let config = repository.load_config()?;
    let registry = config.registry()?;
    let items = repository.scan_content(&config)?;

    let mut items = registry.build(collection, &items)?.items;
    sort_newest_first(&mut items);

    if let Some(n) = limit {
        items.truncate(n);
    }

    Ok(items)
}

fn sort_newest_first(items: &mut [ContentItem]) {
    items.sort_by(|a, b| match (a.date(), b.date()) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.input_path().cmp(b.input_path())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.input_path().cmp(b.input_path()),
    });
}
