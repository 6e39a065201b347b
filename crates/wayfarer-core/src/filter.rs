//! Search and season/month filtering for the explorer view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Activity, Month, Season, SeasonalEvent};

/// A filter constraint: either everything, or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Copy> Selection<T> {
    /// Step to the next choice in `options`, wrapping back to `All` after the
    /// last one.
    pub fn cycle(self, options: &[T]) -> Self
    where
        T: PartialEq,
    {
        match self {
            Self::All => options.first().map_or(Self::All, |first| Self::Only(*first)),
            Self::Only(current) => options
                .iter()
                .position(|o| *o == current)
                .and_then(|i| options.get(i + 1))
                .map_or(Self::All, |next| Self::Only(*next)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Explorer controls: free-text search plus month and season constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerFilter {
    pub search: String,
    pub month: Selection<Month>,
    pub season: Selection<Season>,
}

impl ExplorerFilter {
    /// Clear the search text and both constraints.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn matches_text(&self, name: &str, description: &str) -> bool {
        let needle = self.search.to_lowercase();
        name.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
    }

    /// Activities matching the search text and season. The month constraint
    /// does not apply to activities.
    pub fn activities<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        activities
            .iter()
            .filter(|a| {
                self.matches_text(&a.name, &a.description) && self.season.matches(&a.season)
            })
            .collect()
    }

    /// Events matching the search text, month and season.
    pub fn events<'a>(&self, events: &'a [SeasonalEvent]) -> Vec<&'a SeasonalEvent> {
        events
            .iter()
            .filter(|e| {
                self.matches_text(&e.name, &e.description)
                    && self.month.matches(&e.month)
                    && self.season.matches(&e.season)
            })
            .collect()
    }
}
