//! List registered collections use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};

/// A registered collection and how much of the content it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    pub glob: String,
    pub items: usize,
    pub dated: usize,
}

/// Summarize every registered collection, in registration order.
pub fn list_collections(repository: &FileSystemRepository) -> Result<Vec<CollectionSummary>> {
    let config = repository.load_config()?;
    let registry = config.registry()?;
    let items = repository.scan_content(&config)?;

    Ok(registry
        .build_all(&items)
        .into_iter()
        .map(|c| CollectionSummary {
            dated: c.dated_count(),
            items: c.items.len(),
            name: c.name,
            glob: c.glob,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_collections_counts() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.save_config(&Config::default()).unwrap();
        fs::create_dir_all(temp.path().join("2020")).unwrap();
        fs::write(temp.path().join("2020/2020-12-1-a.md"), "a").unwrap();
        fs::write(temp.path().join("2020/index.md"), "idx").unwrap();

        let summaries = list_collections(&repo).unwrap();

        assert_eq!(summaries.len(), 3);
        assert_eq!(
            summaries[0],
            CollectionSummary {
                name: "aoc2020".to_string(),
                glob: "2020/*.md".to_string(),
                items: 2,
                dated: 1,
            }
        );
        assert_eq!(summaries[2].items, 0);
    }
}
