//! Integration tests for view selection, restaurant ranking and explorer
//! filtering over the sample catalog.

use rand::SeedableRng;
use rand::rngs::StdRng;

use wayfarer_core::{
    Catalog, ExplorationType, ExplorerFilter, Month, Selection, SortKey, TravelPlan, ViewState,
    rank_restaurants,
};

fn names<T>(items: &[&T], name: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| name(*item).to_string()).collect()
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn sort_by_reviews_orders_by_review_count() {
    let catalog = Catalog::sample();
    let ranked = rank_restaurants(&catalog.restaurants, SortKey::Reviews);
    assert_eq!(
        names(&ranked, |r| &r.name),
        ["Joe's Pizza", "Le Bernardin", "Eleven Madison Park"]
    );
    assert_eq!(catalog.restaurants[0].name, "Le Bernardin");
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn hiking_search_finds_one_activity() {
    let filter = ExplorerFilter {
        search: "hiking".into(),
        season: Selection::All,
        ..Default::default()
    };
    let found = filter.activities(&Catalog::sample().activities);
    assert_eq!(names(&found, |a| &a.name), ["Mountain Hiking Adventure"]);
}

#[test]
fn unmatched_search_finds_nothing() {
    let filter = ExplorerFilter {
        search: "zeppelin".into(),
        ..Default::default()
    };
    assert!(filter.activities(&Catalog::sample().activities).is_empty());
    assert!(filter.events(&Catalog::sample().events).is_empty());
}

#[test]
fn april_filter_finds_cherry_blossoms() {
    let filter = ExplorerFilter {
        month: "April".parse().unwrap(),
        ..Default::default()
    };
    let found = filter.events(&Catalog::sample().events);
    assert_eq!(names(&found, |e| &e.name), ["Cherry Blossom Festival"]);
}

#[test]
fn all_months_keeps_every_event_in_order() {
    let filter = ExplorerFilter {
        month: "all".parse::<Selection<Month>>().unwrap(),
        ..Default::default()
    };
    let found = filter.events(&Catalog::sample().events);
    assert_eq!(
        names(&found, |e| &e.name),
        [
            "Cherry Blossom Festival",
            "Summer Music Concert Series",
            "Fall Food Festival"
        ]
    );
}

// ---------------------------------------------------------------------------
// View selection
// ---------------------------------------------------------------------------

#[test]
fn restaurant_plan_enters_restaurant_view_sorted_by_rating() {
    let catalog = Catalog::sample();
    let plan = TravelPlan::new("Paris", 5, ExplorationType::Restaurant).unwrap();

    let state = ViewState::Home.submit(plan, catalog);

    let ViewState::Restaurants(view) = &state else {
        panic!("expected restaurant view, got {}", state.name());
    };
    assert_eq!(view.sort, SortKey::Rating);
    assert_eq!(view.plan.days(), 5);
    let ids: Vec<&str> = catalog.restaurants.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"], "catalog order must not change");
}

#[test]
fn changing_sort_key_only_changes_the_view() {
    let catalog = Catalog::sample();
    let plan = TravelPlan::new("Paris", 5, ExplorationType::Restaurant).unwrap();
    let ViewState::Restaurants(mut view) = ViewState::Home.submit(plan, catalog) else {
        panic!("expected restaurant view");
    };

    view.sort = SortKey::Reviews;
    let ranked = view.restaurants(catalog);
    assert_eq!(ranked[0].name, "Joe's Pizza");
    assert_eq!(catalog.restaurants[0].name, "Le Bernardin");
}

#[test]
fn itinerary_plan_generates_days_on_entry() {
    let catalog = Catalog::sample();
    let plan = TravelPlan::new("Paris", 6, ExplorationType::Itinerary).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let state = ViewState::Home.submit_with(&mut rng, plan, catalog);

    let ViewState::Itinerary(view) = state else {
        panic!("expected itinerary view");
    };
    assert_eq!(view.days.len(), 6);
    assert_eq!(view.days[5].day, 6);
}

#[test]
fn form_rejections_stay_home() {
    let catalog = Catalog::sample();
    let mut rng = StdRng::seed_from_u64(0);

    let cases = [
        ("", 3, "itinerary"),
        ("   ", 3, "restaurant"),
        ("Paris", 0, "itinerary"),
        ("Paris", 3, "nightlife"),
    ];
    for (destination, days, exploration) in cases {
        let state = ViewState::Home.submit_form(&mut rng, catalog, destination, days, exploration);
        assert_eq!(
            state,
            ViewState::Home,
            "{destination:?}/{days}/{exploration:?} should not leave home"
        );
    }
}

#[test]
fn form_submit_from_a_view_is_ignored() {
    let catalog = Catalog::sample();
    let mut rng = StdRng::seed_from_u64(0);

    let shown = ViewState::Home.submit_form(&mut rng, catalog, "Paris", 5, "restaurant");
    assert_eq!(shown.name(), "restaurants");

    let cases = [
        ("Rome", 2, "itinerary"),
        ("Rome", 2, "nightlife"),
        ("  ", 2, "itinerary"),
        ("Rome", 0, "restaurant"),
    ];
    for (destination, days, exploration) in cases {
        let state = shown
            .clone()
            .submit_form(&mut rng, catalog, destination, days, exploration);
        assert_eq!(
            state, shown,
            "{destination:?}/{days}/{exploration:?} should leave the restaurant view as is"
        );
    }
}

#[test]
fn form_submission_then_back() {
    let catalog = Catalog::sample();
    let mut rng = StdRng::seed_from_u64(0);

    let state = ViewState::Home.submit_form(&mut rng, catalog, "Paris", 5, "specific-places");
    assert_eq!(state.name(), "explorer");

    let state = state.back();
    assert_eq!(state, ViewState::Home);
    assert!(state.plan().is_none());
}
