//! Immutable creator store.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::CreatorRecord;
use crate::directory::{self, DirectoryResults, FilterCriteria, SortMode};
use crate::error::HubError;

const BUNDLED_CREATORS: &str = include_str!("../data/creators.json");

/// The curated set of creators the directory runs against.
///
/// Built once, validated on construction and never mutated afterwards, so it
/// can be shared freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CreatorStore {
    creators: Vec<CreatorRecord>,
    categories: Vec<String>,
}

impl CreatorStore {
    /// The dataset compiled into the crate.
    pub fn bundled() -> Result<Self, HubError> {
        Self::from_json(BUNDLED_CREATORS)
    }

    /// Parse a JSON array of camelCase creator records.
    pub fn from_json(json: &str) -> Result<Self, HubError> {
        let creators: Vec<CreatorRecord> = serde_json::from_str(json)?;
        Self::from_records(creators)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HubError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            creators = store.len(),
            "loaded creator dataset"
        );
        Ok(store)
    }

    /// Validate `creators` and build the store. Record order is preserved.
    pub fn from_records(creators: Vec<CreatorRecord>) -> Result<Self, HubError> {
        {
            let mut seen = HashSet::new();
            for creator in &creators {
                creator.validate()?;
                if !seen.insert(creator.id.as_str()) {
                    return Err(HubError::DuplicateCreator(creator.id.to_string()));
                }
            }
        }

        let categories = directory::distinct_categories(&creators);
        Ok(Self {
            creators,
            categories,
        })
    }

    pub fn all(&self) -> &[CreatorRecord] {
        &self.creators
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    /// Look up a creator by id.
    pub fn find(&self, id: &str) -> Option<&CreatorRecord> {
        self.creators.iter().find(|creator| creator.id.as_str() == id)
    }

    /// Like `find`, but a missing id is an error.
    pub fn get(&self, id: &str) -> Result<&CreatorRecord, HubError> {
        self.find(id)
            .ok_or_else(|| HubError::CreatorNotFound(id.to_string()))
    }

    /// Sorted, de-duplicated primary categories.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn query(&self, criteria: &FilterCriteria) -> DirectoryResults<'_> {
        let items = directory::query(&self.creators, criteria);
        DirectoryResults::new(items, criteria.clone(), self.len())
    }

    /// Every creator, highest sales first.
    pub fn by_sales(&self) -> Vec<&CreatorRecord> {
        let mut creators: Vec<&CreatorRecord> = self.creators.iter().collect();
        directory::sort_creators(&mut creators, SortMode::Sales);
        creators
    }

    /// The `limit` best-selling creators.
    pub fn top_creators(&self, limit: usize) -> Vec<&CreatorRecord> {
        let mut creators = self.by_sales();
        creators.truncate(limit);
        creators
    }
}
