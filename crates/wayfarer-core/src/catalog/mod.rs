//! Reference data: places, restaurants, activities and seasonal events.
//!
//! The built-in sample catalog is defined in `sample.toml` and embedded in
//! the binary at compile time. Alternative catalogs with the same layout can
//! be loaded from disk. A catalog is never mutated once built.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Activity, Place, Restaurant, SeasonalEvent};

/// Errors from loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("catalog must contain at least one place")]
    NoPlaces,

    #[error("catalog must contain at least one activity")]
    NoActivities,

    #[error("duplicate {collection} id: {id:?}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("{collection} {id:?} has rating {value} (expected 0 to 5)")]
    RatingOutOfRange {
        collection: &'static str,
        id: String,
        value: f64,
    },
}

/// The full set of reference collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub events: Vec<SeasonalEvent>,
}

static SAMPLE_TOML: &str = include_str!("sample.toml");

static SAMPLE: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_toml_str(SAMPLE_TOML).expect("embedded sample.toml is invalid")
});

impl Catalog {
    /// The built-in sample catalog, shared for the life of the process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The unit tests in this
    /// module parse it, so a passing build never hits this.
    pub fn sample() -> &'static Catalog {
        &SAMPLE
    }

    /// Parse and validate a catalog TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        tracing::debug!(
            places = catalog.places.len(),
            restaurants = catalog.restaurants.len(),
            activities = catalog.activities.len(),
            events = catalog.events.len(),
            "catalog parsed"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading catalog");
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.places.is_empty() {
            return Err(CatalogError::NoPlaces);
        }
        if self.activities.is_empty() {
            return Err(CatalogError::NoActivities);
        }

        unique_ids("place", self.places.iter().map(|p| p.id.as_str()))?;
        unique_ids("restaurant", self.restaurants.iter().map(|r| r.id.as_str()))?;
        unique_ids("activity", self.activities.iter().map(|a| a.id.as_str()))?;
        unique_ids("event", self.events.iter().map(|e| e.id.as_str()))?;

        for place in &self.places {
            check_rating("place", &place.id, place.rating)?;
        }
        for restaurant in &self.restaurants {
            check_rating("restaurant", &restaurant.id, restaurant.rating)?;
            check_rating("restaurant", &restaurant.id, restaurant.google_rating)?;
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

fn check_rating(collection: &'static str, id: &str, value: f64) -> Result<(), CatalogError> {
    if (0.0..=5.0).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::RatingOutOfRange {
            collection,
            id: id.to_owned(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Month, PriceRange, Season};

    const MINIMAL: &str = r#"
[[places]]
id = "p1"
name = "Harbour"
description = "Old harbour front"
category = "Waterfront"
rating = 4.1
best_time_to_visit = "Dusk"
estimated_duration = "1 hour"

[[activities]]
id = "a1"
name = "Kayak"
description = "Paddle the bay"
season = "Summer"
duration = "2 hours"
difficulty = "moderate"
price = "$40"
"#;

    #[test]
    fn embedded_sample_is_valid() {
        let catalog = Catalog::from_toml_str(SAMPLE_TOML).unwrap();
        assert_eq!(catalog.places.len(), 3);
        assert_eq!(catalog.restaurants.len(), 3);
        assert_eq!(catalog.activities.len(), 3);
        assert_eq!(catalog.events.len(), 3);
    }

    #[test]
    fn sample_matches_known_records() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.places[0].name, "Eiffel Tower");
        assert_eq!(catalog.restaurants[2].name, "Joe's Pizza");
        assert_eq!(catalog.restaurants[2].price_range, PriceRange::Budget);
        assert_eq!(catalog.restaurants[0].customer_reviews, 2847);
        assert_eq!(catalog.activities[2].season, Season::Fall);
        assert_eq!(catalog.events[0].month, Month::April);
    }

    #[test]
    fn optional_collections_default_to_empty() {
        let catalog = Catalog::from_toml_str(MINIMAL).unwrap();
        assert!(catalog.restaurants.is_empty());
        assert!(catalog.events.is_empty());
        assert_eq!(catalog.places[0].image_url, None);
    }

    #[test]
    fn rejects_catalog_without_places() {
        let content = MINIMAL.replace("[[places]]", "[[unused]]");
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, CatalogError::NoPlaces), "got {err:?}");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let content = format!(
            "{MINIMAL}\n[[activities]]\nid = \"a1\"\nname = \"Again\"\ndescription = \"dup\"\n\
             season = \"Winter\"\nduration = \"1 hour\"\ndifficulty = \"easy\"\nprice = \"$1\"\n"
        );
        let err = Catalog::from_toml_str(&content).unwrap_err();
        match err {
            CatalogError::DuplicateId { collection, id } => {
                assert_eq!(collection, "activity");
                assert_eq!(id, "a1");
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn rejects_rating_above_five() {
        let content = MINIMAL.replace("rating = 4.1", "rating = 7.5");
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(
            err.to_string().contains("has rating 7.5"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = Catalog::load(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("catalog.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.activities[0].name, "Kayak");
    }
}
