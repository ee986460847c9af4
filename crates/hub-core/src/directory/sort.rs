//! Creator ordering.

use std::cmp::Ordering;

use crate::catalog::CreatorRecord;
use crate::directory::SortMode;

/// Compare two creators for `mode`. Every mode orders high to low.
pub fn compare(a: &CreatorRecord, b: &CreatorRecord, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Sales | SortMode::Recent => b.sales.cmp(&a.sales),
        SortMode::Rating => b.rating.total_cmp(&a.rating),
    }
}

/// Stable sort; creators with equal keys keep their relative order.
pub fn sort_creators(creators: &mut [&CreatorRecord], mode: SortMode) {
    creators.sort_by(|a, b| compare(a, b, mode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::creator;

    fn ids(creators: &[&CreatorRecord]) -> Vec<String> {
        creators.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_sales_descending() {
        let a = creator("a", "X", 4.0, 10);
        let b = creator("b", "X", 4.0, 30);
        let c = creator("c", "X", 4.0, 20);
        let mut list = vec![&a, &b, &c];
        sort_creators(&mut list, SortMode::Sales);
        assert_eq!(ids(&list), ["b", "c", "a"]);
    }

    #[test]
    fn test_rating_descending_stable() {
        let a = creator("a", "X", 4.8, 10);
        let b = creator("b", "X", 4.9, 10);
        let c = creator("c", "X", 4.8, 99);
        let mut list = vec![&a, &b, &c];
        sort_creators(&mut list, SortMode::Rating);
        assert_eq!(ids(&list), ["b", "a", "c"]);
    }

    #[test]
    fn test_recent_matches_sales() {
        let a = creator("a", "X", 4.0, 1);
        let b = creator("b", "X", 4.0, 2);
        assert_eq!(
            compare(&a, &b, SortMode::Recent),
            compare(&a, &b, SortMode::Sales)
        );
        assert_eq!(compare(&a, &b, SortMode::Recent), Ordering::Greater);
    }

    #[test]
    fn test_equal_sales_keep_input_order() {
        let a = creator("a", "X", 4.0, 5);
        let b = creator("b", "X", 3.0, 5);
        let c = creator("c", "X", 5.0, 5);
        let mut list = vec![&a, &b, &c];
        sort_creators(&mut list, SortMode::Sales);
        assert_eq!(ids(&list), ["a", "b", "c"]);
    }
}
