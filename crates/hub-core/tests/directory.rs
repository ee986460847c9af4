//! Directory behaviour against the bundled creator dataset.

use hub_core::display::{format_count, format_rating};
use hub_core::prelude::*;

fn store() -> CreatorStore {
    CreatorStore::bundled().expect("bundled dataset is valid")
}

#[test]
fn default_criteria_return_everyone_by_sales() {
    let store = store();
    let results = store.query(&FilterCriteria::default());

    assert_eq!(results.len(), store.len());
    assert_eq!(results.ids()[0], "caitlynminimalist");
    assert!(results
        .items
        .windows(2)
        .all(|pair| pair[0].sales >= pair[1].sales));
}

#[test]
fn jewelry_by_sales() {
    let criteria = FilterCriteria::new()
        .with_category(CategoryFilter::only("Jewelry"))
        .with_sort(SortMode::Sales);

    assert_eq!(
        store().query(&criteria).ids(),
        ["caitlynminimalist", "yakutum"]
    );
}

#[test]
fn watchlist_is_empty() {
    let criteria =
        FilterCriteria::new().with_vetting(VettingFilter::Only(VettingStatus::Watchlist));
    assert!(store().query(&criteria).is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let store = store();
    for needle in ["caitlyn", "MINIMAL", "  Caitlyn  "] {
        let results = store.query(&FilterCriteria::new().with_search(needle));
        assert!(
            results.ids().contains(&"caitlynminimalist"),
            "{needle:?} should find CaitlynMinimalist"
        );
    }

    assert!(store
        .query(&FilterCriteria::new().with_search("zzz-no-match"))
        .is_empty());
}

#[test]
fn rating_floor_is_inclusive() {
    let store = store();
    let results = store.query(&FilterCriteria::new().with_rating_floor(RatingFloor::FourEightPlus));
    assert_eq!(results.len(), store.len());

    let strict = store.query(&FilterCriteria::new().with_min_rating(4.85));
    assert!(strict.iter().all(|c| c.rating >= 4.85));
    assert!(strict.ids().iter().all(|id| *id != "plannerpress" && *id != "cozymapco"));
}

#[test]
fn rating_sort_keeps_store_order_for_ties() {
    let store = store();
    let results = store.query(&FilterCriteria::new().with_sort(SortMode::Rating));

    let top_rated: Vec<&str> = store
        .all()
        .iter()
        .filter(|c| c.rating == 4.9)
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(&results.ids()[..top_rated.len()], top_rated.as_slice());
}

#[test]
fn recent_orders_like_sales() {
    let store = store();
    let recent = store.query(&FilterCriteria::new().with_sort(SortMode::Recent));
    let sales = store.query(&FilterCriteria::new().with_sort(SortMode::Sales));
    assert_eq!(recent.ids(), sales.ids());
}

#[test]
fn categories_are_sorted_and_unique() {
    let store = store();
    let categories = store.categories();

    assert!(categories.windows(2).all(|pair| pair[0] < pair[1]));
    for expected in [
        "Jewelry",
        "Home Decor",
        "Digital Products",
        "Craft Supplies",
        "Wedding & Party",
        "Stationery",
    ] {
        assert!(categories.iter().any(|c| c == expected), "missing {expected}");
    }
}

#[test]
fn top_creators_for_home_page() {
    let store = store();
    let top: Vec<&str> = store
        .top_creators(3)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(top, ["caitlynminimalist", "bohemianfindings", "modparty"]);
}

#[test]
fn profile_labels() {
    let store = store();
    let creator = store.get("caitlynminimalist").unwrap();

    assert_eq!(format_rating(creator.rating), "4.9\u{2605}");
    assert_eq!(format_count(creator.sales), "2,800,000");
    assert_eq!(creator.affiliate.commission_range(), "8% \u{2013} 12%");
    assert_eq!(
        creator.affiliate.min_clicks_label().as_deref(),
        Some("300+ clicks / month")
    );
    assert_eq!(creator.vetting_status.badge_label(), "Verified partner");

    let featured = creator.featured_product().unwrap();
    assert_eq!(featured.price().display(), "$39.00");
}

#[test]
fn profile_route_resolves() {
    let store = store();
    let creator = Route::parse("#/creators/modparty").resolve_creator(&store);
    assert_eq!(creator.map(|c| c.shop_name.as_str()), Some("ModParty"));
    assert!(Route::parse("/creators/missing").resolve_creator(&store).is_none());
}
