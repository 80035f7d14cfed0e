//! Named, glob-selected collections

use crate::domain::{tag_dates, ContentItem};
use crate::error::{CollateError, Result};
use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A collection registration: a name and the glob selecting its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSpec {
    pub name: String,
    pub glob: String,
}

impl CollectionSpec {
    pub fn new(name: &str, glob: &str) -> Self {
        CollectionSpec {
            name: name.to_string(),
            glob: glob.to_string(),
        }
    }
}

/// A built collection, ready for templating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub name: String,
    pub glob: String,
    pub items: Vec<ContentItem>,
}

impl Collection {
    pub fn dated_count(&self) -> usize {
        self.items.iter().filter(|i| i.date().is_some()).count()
    }
}

// `*` must not cross directory boundaries.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Select the items matching `pattern` and date-tag them.
///
/// Every collection is built through this one transform; the pattern is
/// the only thing that varies between registrations.
pub fn build_collection(pattern: &Pattern, items: &[ContentItem]) -> Vec<ContentItem> {
    let selected = items
        .iter()
        .filter(|item| pattern.matches_with(item.input_path(), MATCH_OPTIONS))
        .cloned()
        .collect();

    tag_dates(selected)
}

#[derive(Debug, Clone)]
struct Registration {
    spec: CollectionSpec,
    pattern: Pattern,
}

/// Collections registered by name, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    registrations: Vec<Registration>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        CollectionRegistry::default()
    }

    /// Register every spec, stopping at the first invalid one.
    pub fn from_specs(specs: &[CollectionSpec]) -> Result<Self> {
        let mut registry = CollectionRegistry::new();
        for spec in specs {
            registry.register(spec.clone())?;
        }
        Ok(registry)
    }

    /// Register a collection. Names must be unique and non-empty.
    pub fn register(&mut self, spec: CollectionSpec) -> Result<()> {
        if spec.name.trim().is_empty() {
            return Err(CollateError::Config(
                "Collection name must not be empty".to_string(),
            ));
        }

        if self.get(&spec.name).is_some() {
            return Err(CollateError::Config(format!(
                "Duplicate collection name: {}",
                spec.name
            )));
        }

        let pattern = Pattern::new(&spec.glob)?;
        self.registrations.push(Registration { spec, pattern });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CollectionSpec> {
        self.registrations
            .iter()
            .find(|r| r.spec.name == name)
            .map(|r| &r.spec)
    }

    pub fn specs(&self) -> impl Iterator<Item = &CollectionSpec> {
        self.registrations.iter().map(|r| &r.spec)
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Build one registered collection from the scanned items.
    pub fn build(&self, name: &str, items: &[ContentItem]) -> Result<Collection> {
        let registration = self
            .registrations
            .iter()
            .find(|r| r.spec.name == name)
            .ok_or_else(|| CollateError::CollectionNotFound(name.to_string()))?;

        Ok(Self::build_registration(registration, items))
    }

    /// Build every registered collection, in registration order.
    pub fn build_all(&self, items: &[ContentItem]) -> Vec<Collection> {
        self.registrations
            .iter()
            .map(|r| Self::build_registration(r, items))
            .collect()
    }

    fn build_registration(registration: &Registration, items: &[ContentItem]) -> Collection {
        let items = build_collection(&registration.pattern, items);
        let collection = Collection {
            name: registration.spec.name.clone(),
            glob: registration.spec.glob.clone(),
            items,
        };
        info!(
            collection = %collection.name,
            glob = %collection.glob,
            items = collection.items.len(),
            dated = collection.dated_count(),
            "built collection"
        );
        collection
    }
}
