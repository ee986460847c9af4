//! Directory module.
//!
//! Filtering, ordering and category extraction over creator records.

mod criteria;
mod filter;
mod query;
mod sort;

pub use criteria::{CategoryFilter, FilterCriteria, RatingFloor, SortMode, VettingFilter};
pub use filter::matches;
pub use query::{distinct_categories, query, DirectoryResults, EMPTY_RESULTS_MESSAGE};
pub use sort::{compare, sort_creators};
