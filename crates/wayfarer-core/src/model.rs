use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Error returned when a label does not name a variant of one of the model enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------

/// Which view a submitted plan asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplorationType {
    #[default]
    Itinerary,
    Restaurant,
    SpecificPlaces,
}

impl ExplorationType {
    pub const ALL: [ExplorationType; 3] = [Self::Itinerary, Self::Restaurant, Self::SpecificPlaces];

    /// Short label used by the entry form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Itinerary => "Itinerary",
            Self::Restaurant => "Restaurant",
            Self::SpecificPlaces => "Specific Places",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Itinerary => "Complete day-by-day travel plan with seasonal recommendations",
            Self::Restaurant => "Find best restaurants based on reviews and ratings",
            Self::SpecificPlaces => "Explore special activities and events at specific locations",
        }
    }
}

impl fmt::Display for ExplorationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Itinerary => "itinerary",
            Self::Restaurant => "restaurant",
            Self::SpecificPlaces => "specific-places",
        };
        f.write_str(s)
    }
}

impl FromStr for ExplorationType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "itinerary" => Ok(Self::Itinerary),
            "restaurant" => Ok(Self::Restaurant),
            "specific-places" => Ok(Self::SpecificPlaces),
            other => Err(ParseLabelError::new("exploration type", other)),
        }
    }
}

// ---------------------------------------------------------------------------

/// Season, used as an itinerary label and as an explorer filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Cycle order used when labelling itinerary days.
    pub const ALL: [Season; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Spring => "🌸",
            Self::Summer => "☀️",
            Self::Fall => "🍂",
            Self::Winter => "❄️",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        };
        f.write_str(s)
    }
}

impl FromStr for Season {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|season| season.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLabelError::new("season", s))
    }
}

// ---------------------------------------------------------------------------

/// Calendar month, by English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLabelError::new("month", s))
    }
}

// ---------------------------------------------------------------------------

/// Qualitative crowd estimate attached to an itinerary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub const ALL: [CrowdLevel; 3] = [Self::Low, Self::Medium, Self::High];
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

impl FromStr for CrowdLevel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseLabelError::new("crowd level", other)),
        }
    }
}

// ---------------------------------------------------------------------------

/// Physical effort an activity asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "challenging" => Ok(Self::Challenging),
            other => Err(ParseLabelError::new("difficulty", other)),
        }
    }
}

// ---------------------------------------------------------------------------

/// Kind of seasonal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Festival,
    Activity,
    Occasion,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Festival => "festival",
            Self::Activity => "activity",
            Self::Occasion => "occasion",
        };
        f.write_str(s)
    }
}

impl FromStr for EventKind {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "festival" => Ok(Self::Festival),
            "activity" => Ok(Self::Activity),
            "occasion" => Ok(Self::Occasion),
            other => Err(ParseLabelError::new("event type", other)),
        }
    }
}

// ---------------------------------------------------------------------------

/// Restaurant price bracket, `$` through `$$$$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Expensive => "$$$",
            Self::Luxury => "$$$$",
        };
        f.write_str(s)
    }
}

impl FromStr for PriceRange {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$" => Ok(Self::Budget),
            "$$" => Ok(Self::Moderate),
            "$$$" => Ok(Self::Expensive),
            "$$$$" => Ok(Self::Luxury),
            other => Err(ParseLabelError::new("price range", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A sight worth visiting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// 0 to 5.
    pub rating: f64,
    pub best_time_to_visit: String,
    pub estimated_duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    /// Number of customer reviews backing `rating`.
    pub customer_reviews: u32,
    pub google_rating: f64,
    pub price_range: PriceRange,
    pub location: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Free-text distance from the city center, e.g. `"0.5 km"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub season: Season,
    pub duration: String,
    pub difficulty: Difficulty,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub month: Month,
    pub season: Season,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub location: String,
}

// ---------------------------------------------------------------------------
// Derived records
// ---------------------------------------------------------------------------

/// One generated day of an itinerary. Recomputed on every submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based position in the itinerary.
    pub day: u32,
    pub season: Season,
    pub crowd_level: CrowdLevel,
    pub suggestions: Vec<String>,
    pub must_visit_places: Vec<Place>,
    pub activities: Vec<Activity>,
}
