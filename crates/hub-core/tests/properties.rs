//! Property-based tests for the directory query engine.

use hub_core::catalog::{AffiliateProgramDetails, ProgramType, SocialLinks};
use hub_core::directory::{matches, query};
use hub_core::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const CATEGORIES: [&str; 4] = ["Jewelry", "Home Decor", "Stationery", "Craft Supplies"];

fn creator(
    index: usize,
    category: &str,
    rating: f64,
    sales: u64,
    status: VettingStatus,
    name: String,
) -> CreatorRecord {
    CreatorRecord {
        id: CreatorId::new(format!("creator-{index}")),
        shop_name: name.clone(),
        owner_name: format!("{name} owner"),
        shop_url: format!("https://www.etsy.com/shop/{name}"),
        avatar_url: String::new(),
        header_image_url: String::new(),
        primary_category: category.to_string(),
        tags: vec![category.to_string()],
        location: String::new(),
        rating,
        review_count: 0,
        sales,
        short_description: String::new(),
        bio: String::new(),
        vetting_status: status,
        vetting_notes: String::new(),
        badges: Vec::new(),
        affiliate: AffiliateProgramDetails {
            program_type: ProgramType::EtsyAffiliate,
            base_commission_rate: 4.0,
            boosted_commission_rate: None,
            cookie_window_days: 30,
            min_monthly_clicks: None,
            notes: String::new(),
            application_url: None,
        },
        social: SocialLinks::default(),
        top_products: Vec::new(),
    }
}

fn status_strategy() -> impl Strategy<Value = VettingStatus> {
    prop_oneof![
        Just(VettingStatus::Verified),
        Just(VettingStatus::PendingReview),
        Just(VettingStatus::Watchlist),
    ]
}

fn creators_strategy() -> impl Strategy<Value = Vec<CreatorRecord>> {
    prop::collection::vec(
        (
            0..CATEGORIES.len(),
            // Coarse ratings so ties are common.
            (0u8..=10).prop_map(|r| f64::from(r) / 2.0),
            0u64..5,
            status_strategy(),
            "[a-zA-Z]{1,8}",
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cat, rating, sales, status, name))| {
                creator(i, CATEGORIES[cat], rating, sales, status, name)
            })
            .collect()
    })
}

fn sort_strategy() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::Sales),
        Just(SortMode::Rating),
        Just(SortMode::Recent),
    ]
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof!["", "[a-z]{1,3}", " [A-Z]{1,2} "],
        prop::option::of(0..CATEGORIES.len()),
        // Out-of-range and NaN floors are accepted as-is.
        prop_oneof![9 => -1.0f64..6.0, 1 => Just(f64::NAN)],
        prop::option::of(status_strategy()),
        sort_strategy(),
    )
        .prop_map(|(search, category, min_rating, status, sort)| {
            FilterCriteria::new()
                .with_search(search)
                .with_category(match category {
                    Some(i) => CategoryFilter::only(CATEGORIES[i]),
                    None => CategoryFilter::All,
                })
                .with_min_rating(min_rating)
                .with_vetting(match status {
                    Some(status) => VettingFilter::Only(status),
                    None => VettingFilter::All,
                })
                .with_sort(sort)
        })
}

fn position(all: &[CreatorRecord], creator: &CreatorRecord) -> usize {
    all.iter()
        .position(|c| c.id == creator.id)
        .unwrap_or(usize::MAX)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Default criteria keep every creator.
    #[test]
    fn default_criteria_keep_everyone(all in creators_strategy(), sort in sort_strategy()) {
        let result = query(&all, &FilterCriteria::new().with_sort(sort));
        prop_assert_eq!(result.len(), all.len());
    }

    /// Results are exactly the creators that satisfy the predicate.
    #[test]
    fn results_match_predicate(all in creators_strategy(), criteria in criteria_strategy()) {
        let result = query(&all, &criteria);
        let expected = all.iter().filter(|c| matches(c, &criteria)).count();

        prop_assert_eq!(result.len(), expected);
        for creator in &result {
            prop_assert!(creator.rating >= criteria.min_rating);
        }
    }

    /// Repeated calls give identical output.
    #[test]
    fn query_is_deterministic(all in creators_strategy(), criteria in criteria_strategy()) {
        let first: Vec<_> = query(&all, &criteria).iter().map(|c| c.id.clone()).collect();
        let second: Vec<_> = query(&all, &criteria).iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    /// Sort keys never increase, and ties keep input order.
    #[test]
    fn ordering_is_monotone_and_stable(all in creators_strategy(), criteria in criteria_strategy()) {
        let result = query(&all, &criteria);

        for pair in result.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let tied = match criteria.sort_by {
                SortMode::Sales | SortMode::Recent => {
                    prop_assert!(a.sales >= b.sales);
                    a.sales == b.sales
                }
                SortMode::Rating => {
                    prop_assert!(a.rating >= b.rating);
                    a.rating == b.rating
                }
            };
            if tied {
                prop_assert!(position(&all, a) < position(&all, b));
            }
        }
    }

    /// Categories are sorted, unique and cover every creator.
    #[test]
    fn categories_cover_store(all in creators_strategy()) {
        let categories = hub_core::directory::distinct_categories(&all);

        prop_assert!(categories.windows(2).all(|pair| pair[0] < pair[1]));
        for creator in &all {
            prop_assert!(categories.contains(&creator.primary_category));
        }
    }
}
