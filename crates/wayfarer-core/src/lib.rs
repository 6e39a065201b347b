//! Trip planning core: domain model, reference catalog, itinerary
//! generation, restaurant ranking, explorer filtering and view selection.

pub mod catalog;
pub mod filter;
pub mod itinerary;
pub mod model;
pub mod plan;
pub mod ranking;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use filter::{ExplorerFilter, Selection};
pub use itinerary::{
    ExportError, ExportFormat, ItineraryDocument, export_itinerary, generate_itinerary,
    generate_itinerary_with,
};
pub use model::{
    Activity, CrowdLevel, Difficulty, EventKind, ExplorationType, ItineraryDay, Month,
    ParseLabelError, Place, PriceRange, Restaurant, Season, SeasonalEvent,
};
pub use plan::{PlanError, TravelPlan, clamp_days, parse_days};
pub use ranking::{SortKey, rank_restaurants, rating_stars};
pub use view::{ExplorerView, ItineraryView, RestaurantView, ViewState};
