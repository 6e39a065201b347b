//! View selection state machine.
//!
//! ```text
//! home         -> itinerary    (submit, exploration = itinerary)
//! home         -> restaurants  (submit, exploration = restaurant)
//! home         -> explorer     (submit, exploration = specific-places)
//! itinerary    -> home         (back)
//! restaurants  -> home         (back)
//! explorer     -> home         (back)
//! ```
//!
//! Transitions consume the current state and return the next one. There is
//! no history: going back always lands on `Home` and drops the plan.

use rand::Rng;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::filter::ExplorerFilter;
use crate::itinerary::generate_itinerary_with;
use crate::model::{Activity, ExplorationType, ItineraryDay, Restaurant, SeasonalEvent};
use crate::plan::TravelPlan;
use crate::ranking::{SortKey, rank_restaurants};

/// Day-by-day plan, generated when the view is entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryView {
    pub plan: TravelPlan,
    pub days: Vec<ItineraryDay>,
}

/// Restaurant list with its sort control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantView {
    pub plan: TravelPlan,
    pub sort: SortKey,
}

impl RestaurantView {
    /// The catalog's restaurants in the currently selected order.
    pub fn restaurants<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Restaurant> {
        rank_restaurants(&catalog.restaurants, self.sort)
    }
}

/// Activities and events explorer with its filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerView {
    pub plan: TravelPlan,
    pub filter: ExplorerFilter,
}

impl ExplorerView {
    pub fn activities<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Activity> {
        self.filter.activities(&catalog.activities)
    }

    pub fn events<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SeasonalEvent> {
        self.filter.events(&catalog.events)
    }

    /// True when the current filter leaves neither activities nor events.
    pub fn is_empty(&self, catalog: &Catalog) -> bool {
        self.activities(catalog).is_empty() && self.events(catalog).is_empty()
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewState {
    /// No plan yet: the entry form.
    #[default]
    Home,
    Itinerary(ItineraryView),
    Restaurants(RestaurantView),
    Explorer(ExplorerView),
}

impl ViewState {
    /// Submit a plan, generating any itinerary with the thread-local RNG.
    pub fn submit(self, plan: TravelPlan, catalog: &Catalog) -> Self {
        self.submit_with(&mut rand::rng(), plan, catalog)
    }

    /// Submit a plan from `Home`, switching to the view its exploration type
    /// names. Ignored when a view is already showing.
    pub fn submit_with<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        plan: TravelPlan,
        catalog: &Catalog,
    ) -> Self {
        if !matches!(self, Self::Home) {
            tracing::debug!(view = self.name(), "submit ignored outside the entry form");
            return self;
        }

        tracing::info!(
            destination = plan.destination(),
            days = plan.days(),
            exploration = %plan.exploration_type(),
            "plan submitted"
        );

        match plan.exploration_type() {
            ExplorationType::Itinerary => {
                let days = generate_itinerary_with(rng, catalog, plan.destination(), plan.days());
                Self::Itinerary(ItineraryView { plan, days })
            }
            ExplorationType::Restaurant => Self::Restaurants(RestaurantView {
                plan,
                sort: SortKey::default(),
            }),
            ExplorationType::SpecificPlaces => Self::Explorer(ExplorerView {
                plan,
                filter: ExplorerFilter::default(),
            }),
        }
    }

    /// Submit raw form values. A blank destination, zero days or an
    /// unrecognized exploration type leaves the machine on `Home`. Like
    /// [`submit_with`](Self::submit_with), this is ignored outside `Home`.
    pub fn submit_form<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        catalog: &Catalog,
        destination: &str,
        days: u32,
        exploration: &str,
    ) -> Self {
        if !matches!(self, Self::Home) {
            tracing::debug!(view = self.name(), "form submit ignored outside the entry form");
            return self;
        }

        let exploration = match exploration.parse::<ExplorationType>() {
            Ok(exploration) => exploration,
            Err(e) => {
                tracing::debug!(error = %e, "staying on the entry form");
                return self;
            }
        };
        match TravelPlan::new(destination, days, exploration) {
            Ok(plan) => self.submit_with(rng, plan, catalog),
            Err(e) => {
                tracing::debug!(error = %e, "plan rejected");
                self
            }
        }
    }

    /// Return to the entry form, discarding the current plan.
    pub fn back(self) -> Self {
        if !matches!(self, Self::Home) {
            tracing::info!(from = self.name(), "back to home");
        }
        Self::Home
    }

    /// The plan behind the current view, if any.
    pub fn plan(&self) -> Option<&TravelPlan> {
        match self {
            Self::Home => None,
            Self::Itinerary(v) => Some(&v.plan),
            Self::Restaurants(v) => Some(&v.plan),
            Self::Explorer(v) => Some(&v.plan),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Itinerary(_) => "itinerary",
            Self::Restaurants(_) => "restaurants",
            Self::Explorer(_) => "explorer",
        }
    }
}
