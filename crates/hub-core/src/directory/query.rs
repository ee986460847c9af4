//! Directory query evaluation.

use std::collections::BTreeSet;

use crate::catalog::CreatorRecord;
use crate::directory::filter::matches_with_needle;
use crate::directory::sort::sort_creators;
use crate::directory::FilterCriteria;

/// Shown by the directory when a query has no results.
pub const EMPTY_RESULTS_MESSAGE: &str = "No creators match your filters yet. Try broadening your \
     search keywords or selecting additional categories.";

/// Filter `all` by `criteria`, then order the survivors by `criteria.sort_by`.
///
/// Pure and deterministic. The input is never reordered; creators with equal
/// sort keys keep their input order.
pub fn query<'a>(all: &'a [CreatorRecord], criteria: &FilterCriteria) -> Vec<&'a CreatorRecord> {
    let needle = criteria.needle();
    let mut matched: Vec<&CreatorRecord> = all
        .iter()
        .filter(|creator| matches_with_needle(creator, criteria, needle.as_deref()))
        .collect();

    sort_creators(&mut matched, criteria.sort_by);

    tracing::debug!(
        total = all.len(),
        matched = matched.len(),
        sort = criteria.sort_by.as_str(),
        "directory query evaluated"
    );

    matched
}

/// Unique primary categories, ascending.
pub fn distinct_categories(all: &[CreatorRecord]) -> Vec<String> {
    all.iter()
        .map(|creator| creator.primary_category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A query result together with the criteria that produced it.
#[derive(Debug, Clone)]
pub struct DirectoryResults<'a> {
    pub items: Vec<&'a CreatorRecord>,
    pub criteria: FilterCriteria,
    /// Size of the store the query ran against.
    pub total: usize,
}

impl<'a> DirectoryResults<'a> {
    pub fn new(items: Vec<&'a CreatorRecord>, criteria: FilterCriteria, total: usize) -> Self {
        Self {
            items,
            criteria,
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CreatorRecord> + '_ {
        self.items.iter().copied()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.items.iter().map(|creator| creator.id.as_str()).collect()
    }

    /// e.g. "Showing 2 of 11 creators".
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "creator" } else { "creators" };
        format!("Showing {} of {} {}", self.len(), self.total, noun)
    }
}
