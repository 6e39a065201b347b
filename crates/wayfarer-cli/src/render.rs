//! Plain-text and JSON rendering of the selected view for `wayfarer plan`.

use std::io::Write;

use anyhow::Result;
use serde_json::{Value, json};

use wayfarer_core::{
    Catalog, CrowdLevel, ExplorationType, ExplorerView, ItineraryView, RestaurantView, ViewState,
    rating_stars,
};

/// Write the current view as human-readable text.
pub fn render_text(out: &mut impl Write, state: &ViewState, catalog: &Catalog) -> Result<()> {
    match state {
        ViewState::Home => render_home(out)?,
        ViewState::Itinerary(view) => render_itinerary(out, view)?,
        ViewState::Restaurants(view) => render_restaurants(out, view, catalog)?,
        ViewState::Explorer(view) => render_explorer(out, view, catalog)?,
    }
    Ok(())
}

/// Build the JSON document for the current view, with the view's controls
/// already applied to the catalog lists.
pub fn render_json(state: &ViewState, catalog: &Catalog) -> Value {
    match state {
        ViewState::Home => json!({ "view": "home" }),
        ViewState::Itinerary(view) => json!({
            "view": "itinerary",
            "plan": view.plan,
            "days": view.days,
        }),
        ViewState::Restaurants(view) => json!({
            "view": "restaurants",
            "plan": view.plan,
            "sort": view.sort,
            "restaurants": view.restaurants(catalog),
        }),
        ViewState::Explorer(view) => json!({
            "view": "explorer",
            "plan": view.plan,
            "filter": view.filter,
            "activities": view.activities(catalog),
            "events": view.events(catalog),
        }),
    }
}

fn render_home(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "No plan selected.")?;
    writeln!(out, "Choose what to explore:")?;
    for kind in ExplorationType::ALL {
        writeln!(out, "  {:<16} {}", kind.to_string(), kind.description())?;
    }
    Ok(())
}

fn crowd_icon(level: CrowdLevel) -> &'static str {
    match level {
        CrowdLevel::Low => "🟢",
        CrowdLevel::Medium => "🟡",
        CrowdLevel::High => "🔴",
    }
}

fn render_itinerary(out: &mut impl Write, view: &ItineraryView) -> std::io::Result<()> {
    writeln!(out, "Your {} Itinerary", view.plan.destination())?;
    writeln!(
        out,
        "{}-day personalized travel plan with seasonal recommendations",
        view.plan.days()
    )?;

    for day in &view.days {
        writeln!(out)?;
        writeln!(
            out,
            "Day {}  [{}]  {} {} crowd",
            day.day,
            day.season,
            crowd_icon(day.crowd_level),
            day.crowd_level
        )?;

        writeln!(out, "  Must-visit places:")?;
        for place in &day.must_visit_places {
            writeln!(
                out,
                "    - {} ({}, {} stars, {})",
                place.name, place.category, place.rating, place.estimated_duration
            )?;
            writeln!(out, "      {}", place.description)?;
            writeln!(out, "      Best time: {}", place.best_time_to_visit)?;
        }

        writeln!(out, "  Recommended activities:")?;
        for activity in &day.activities {
            writeln!(
                out,
                "    - {} ({}, {}, {}) best in {}",
                activity.name,
                activity.duration,
                activity.price,
                activity.difficulty,
                activity.season
            )?;
        }

        writeln!(out, "  Tips:")?;
        for tip in &day.suggestions {
            writeln!(out, "    * {tip}")?;
        }
    }
    Ok(())
}

fn render_restaurants(
    out: &mut impl Write,
    view: &RestaurantView,
    catalog: &Catalog,
) -> std::io::Result<()> {
    writeln!(out, "Best Restaurants in {}", view.plan.destination())?;
    writeln!(out, "Sorted by: {}", view.sort.label())?;

    let restaurants = view.restaurants(catalog);
    if restaurants.is_empty() {
        writeln!(out)?;
        writeln!(out, "No restaurants in this catalog.")?;
        return Ok(());
    }

    for restaurant in restaurants {
        writeln!(out)?;
        writeln!(
            out,
            "{} [{}]  {}",
            restaurant.name, restaurant.price_range, restaurant.cuisine
        )?;
        writeln!(
            out,
            "  Rating {} {}  |  {} reviews  |  Google {}",
            restaurant.rating,
            rating_stars(restaurant.rating),
            restaurant.customer_reviews,
            restaurant.google_rating
        )?;
        writeln!(out, "  {}", restaurant.location)?;
        if let Some(distance) = &restaurant.distance {
            writeln!(out, "  {distance} from city center")?;
        }
        if !restaurant.specialties.is_empty() {
            writeln!(out, "  Specialties: {}", restaurant.specialties.join(", "))?;
        }
    }
    Ok(())
}

fn render_explorer(
    out: &mut impl Write,
    view: &ExplorerView,
    catalog: &Catalog,
) -> std::io::Result<()> {
    writeln!(out, "Explore Specific Places in {}", view.plan.destination())?;
    writeln!(
        out,
        "Search: {:?}  Month: {}  Season: {}",
        view.filter.search, view.filter.month, view.filter.season
    )?;

    if view.is_empty(catalog) {
        writeln!(out)?;
        writeln!(out, "No activities or events found.")?;
        writeln!(
            out,
            "Try adjusting your search terms or filters to find activities and events."
        )?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Special Activities")?;
    for activity in view.activities(catalog) {
        writeln!(
            out,
            "  - {} [{}] {} {}",
            activity.name,
            activity.difficulty,
            activity.season.emoji(),
            activity.season
        )?;
        writeln!(out, "    {}", activity.description)?;
        writeln!(out, "    {} | {}", activity.duration, activity.price)?;
    }

    writeln!(out)?;
    writeln!(out, "Seasonal Events & Occasions")?;
    for event in view.events(catalog) {
        writeln!(out, "  - {} [{}] {}", event.name, event.kind, event.month)?;
        writeln!(out, "    {}", event.description)?;
        writeln!(out, "    {}", event.location)?;
    }
    Ok(())
}
