//! Creator predicate.

use crate::catalog::CreatorRecord;
use crate::directory::{CategoryFilter, FilterCriteria, VettingFilter};

/// Whether `creator` satisfies every constraint in `criteria`.
///
/// Category is an exact, case-sensitive match. The rating floor is
/// inclusive. Search is a case-insensitive substring match over the shop
/// name, owner, descriptions and tags; a blank search matches everything.
pub fn matches(creator: &CreatorRecord, criteria: &FilterCriteria) -> bool {
    matches_with_needle(creator, criteria, criteria.needle().as_deref())
}

/// `matches` with the needle normalized once by the caller.
pub(crate) fn matches_with_needle(
    creator: &CreatorRecord,
    criteria: &FilterCriteria,
    needle: Option<&str>,
) -> bool {
    let category_ok = match &criteria.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => creator.primary_category == *category,
    };
    if !category_ok {
        return false;
    }

    // A NaN floor is unsatisfiable.
    let rating_ok = creator.rating >= criteria.min_rating;
    if !rating_ok {
        return false;
    }

    let vetting_ok = match criteria.vetting {
        VettingFilter::All => true,
        VettingFilter::Only(status) => creator.vetting_status == status,
    };
    if !vetting_ok {
        return false;
    }

    match needle {
        Some(needle) => creator.search_text().contains(needle),
        None => true,
    }
}
