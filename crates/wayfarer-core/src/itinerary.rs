//! Day-by-day itinerary generation and export.
//!
//! Generation is a deterministic mapping apart from the crowd level, which is
//! drawn per day from the supplied random source. Callers that need
//! reproducible output pass a seeded generator to [`generate_itinerary_with`].

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::{CrowdLevel, ItineraryDay, Season};

/// How many catalog places and activities each day recommends.
pub const PICKS_PER_DAY: usize = 2;

/// Tips attached to every generated day.
pub const SUGGESTIONS: [&str; 4] = [
    "Try local cuisine at nearby restaurants",
    "Visit during early morning for fewer crowds",
    "Bring comfortable walking shoes",
    "Check weather conditions before visiting",
];

/// Generate an itinerary using the thread-local random generator.
pub fn generate_itinerary(catalog: &Catalog, destination: &str, days: u32) -> Vec<ItineraryDay> {
    generate_itinerary_with(&mut rand::rng(), catalog, destination, days)
}

/// Generate `days` itinerary entries, drawing crowd levels from `rng`.
///
/// Day `n` (1-based) gets season `Season::ALL[(n - 1) % 4]`. Every day
/// carries the same leading catalog places and activities and the same
/// [`SUGGESTIONS`]. `days == 0` yields an empty itinerary.
pub fn generate_itinerary_with<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &Catalog,
    destination: &str,
    days: u32,
) -> Vec<ItineraryDay> {
    let places: Vec<_> = catalog.places.iter().take(PICKS_PER_DAY).cloned().collect();
    let activities: Vec<_> = catalog
        .activities
        .iter()
        .take(PICKS_PER_DAY)
        .cloned()
        .collect();
    let suggestions: Vec<String> = SUGGESTIONS.iter().map(|s| s.to_string()).collect();

    tracing::debug!(destination, days, "generating itinerary");

    (0..days)
        .map(|index| ItineraryDay {
            day: index + 1,
            season: Season::ALL[index as usize % Season::ALL.len()],
            crowd_level: CrowdLevel::ALL[rng.random_range(0..CrowdLevel::ALL.len())],
            must_visit_places: places.clone(),
            suggestions: suggestions.clone(),
            activities: activities.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Errors from writing an itinerary to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize itinerary as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize itinerary as TOML: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// File formats an itinerary can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
}

impl ExportFormat {
    /// Pick a format from a file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Self-describing itinerary document as written by [`export_itinerary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDocument {
    pub destination: String,
    pub days: u32,
    #[serde(rename = "day")]
    pub entries: Vec<ItineraryDay>,
}

impl ItineraryDocument {
    /// Wrap generated days. The day count is taken from the last entry's
    /// 1-based `day` number.
    pub fn new(destination: &str, entries: Vec<ItineraryDay>) -> Self {
        Self {
            destination: destination.to_owned(),
            days: entries.last().map_or(0, |entry| entry.day),
            entries,
        }
    }

    /// Serialize the document in the given format.
    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Toml => Ok(toml::to_string_pretty(self)?),
        }
    }
}

/// Write an itinerary to `path`, choosing the format from its extension.
pub fn export_itinerary(path: &Path, document: &ItineraryDocument) -> Result<(), ExportError> {
    let contents = document.render(ExportFormat::from_path(path))?;
    std::fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), days = document.days, "itinerary exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_days_is_empty() {
        let days = generate_itinerary(Catalog::sample(), "Oslo", 0);
        assert!(days.is_empty());
    }

    #[test]
    fn suggestions_are_fixed() {
        let days = generate_itinerary(Catalog::sample(), "Oslo", 2);
        for day in &days {
            assert_eq!(day.suggestions, SUGGESTIONS);
        }
    }

    #[test]
    fn short_catalog_yields_shorter_prefix() {
        let mut catalog = Catalog::sample().clone();
        catalog.places.truncate(1);
        let days = generate_itinerary(&catalog, "Oslo", 3);
        assert!(days.iter().all(|d| d.must_visit_places.len() == 1));
        assert!(days.iter().all(|d| d.activities.len() == PICKS_PER_DAY));
    }

    #[test]
    fn export_format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("trip.toml")), ExportFormat::Toml);
        assert_eq!(ExportFormat::from_path(Path::new("trip.TOML")), ExportFormat::Toml);
        assert_eq!(ExportFormat::from_path(Path::new("trip.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("trip")), ExportFormat::Json);
    }

    #[test]
    fn toml_export_parses_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let entries = generate_itinerary_with(&mut rng, Catalog::sample(), "Lisbon", 3);
        let document = ItineraryDocument::new("Lisbon", entries);

        let rendered = document.render(ExportFormat::Toml).unwrap();
        let parsed: ItineraryDocument = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn export_writes_json_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("lisbon.json");
        let document =
            ItineraryDocument::new("Lisbon", generate_itinerary(Catalog::sample(), "Lisbon", 2));

        export_itinerary(&path, &document).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["destination"], "Lisbon");
        assert_eq!(written["days"], 2);
        assert_eq!(written["day"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn document_day_count_matches_entries() {
        let empty = ItineraryDocument::new("Lisbon", Vec::new());
        assert_eq!(empty.days, 0);

        let document =
            ItineraryDocument::new("Lisbon", generate_itinerary(Catalog::sample(), "Lisbon", 30));
        assert_eq!(document.days, 30);
        assert_eq!(document.entries.len(), 30);
    }

    #[test]
    fn export_reports_unwritable_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("trip.json");
        let document = ItineraryDocument::new("Lisbon", Vec::new());
        let err = export_itinerary(&path, &document).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }), "got {err:?}");
    }
}
