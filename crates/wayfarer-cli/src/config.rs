//! Configuration file management for wayfarer.
//!
//! Provides a TOML-based config file at `~/.config/wayfarer/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use wayfarer_core::plan::{DEFAULT_DAYS, clamp_days};
use wayfarer_core::{Catalog, ExplorationType, SortKey};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub itinerary: ItinerarySection,
}

/// Values pre-filled on the entry form.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// `itinerary`, `restaurant` or `specific-places`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// `rating`, `reviews` or `google-rating`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Catalog TOML to use instead of the built-in sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ItinerarySection {
    /// Fixed seed for crowd levels. Unset means a fresh draw every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the wayfarer config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/wayfarer` or `~/.config/wayfarer`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("wayfarer");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("wayfarer")
}

/// Return the path to the wayfarer config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load the config file. A missing file is `Ok(None)`; an unreadable or
/// malformed one is an error.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(Some(config))
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

/// The config written by `wayfarer init`: every default spelled out.
pub fn starter_config() -> ConfigFile {
    ConfigFile {
        defaults: DefaultsSection {
            days: Some(DEFAULT_DAYS),
            mode: Some(ExplorationType::default().to_string()),
            sort: Some(SortKey::default().to_string()),
        },
        catalog: CatalogSection::default(),
        itinerary: ItinerarySection::default(),
    }
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, PartialEq)]
pub struct WayfarerConfig {
    pub days: u32,
    pub mode: ExplorationType,
    pub sort: SortKey,
    pub catalog_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl WayfarerConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Catalog: `cli_catalog` > `WAYFARER_CATALOG` env > `catalog.path` > built-in sample
    /// - Seed: `cli_seed` > `WAYFARER_SEED` env > `itinerary.seed` > unseeded
    /// - Days, mode, sort: `defaults.*` > built-in default (commands apply their own flags)
    pub fn resolve(cli_catalog: Option<PathBuf>, cli_seed: Option<u64>) -> Result<Self> {
        let file_config = load_config()?.unwrap_or_default();

        let catalog_path = cli_catalog
            .or_else(|| std::env::var_os("WAYFARER_CATALOG").map(PathBuf::from))
            .or(file_config.catalog.path);

        let seed = match cli_seed {
            Some(seed) => Some(seed),
            None => match std::env::var("WAYFARER_SEED") {
                Ok(raw) => Some(
                    raw.parse::<u64>()
                        .with_context(|| format!("WAYFARER_SEED is not a number: {raw:?}"))?,
                ),
                Err(_) => file_config.itinerary.seed,
            },
        };

        let days = file_config
            .defaults
            .days
            .map(|d| clamp_days(i64::from(d)))
            .unwrap_or(DEFAULT_DAYS);

        let mode = match file_config.defaults.mode.as_deref() {
            Some(raw) => raw
                .parse::<ExplorationType>()
                .with_context(|| format!("invalid defaults.mode in config file: {raw:?}"))?,
            None => ExplorationType::default(),
        };

        let sort = match file_config.defaults.sort.as_deref() {
            Some(raw) => raw
                .parse::<SortKey>()
                .with_context(|| format!("invalid defaults.sort in config file: {raw:?}"))?,
            None => SortKey::default(),
        };

        Ok(Self {
            days,
            mode,
            sort,
            catalog_path,
            seed,
        })
    }

    /// The configured catalog, or the built-in sample.
    pub fn load_catalog(&self) -> Result<Cow<'static, Catalog>> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)
                    .with_context(|| format!("failed to load catalog {}", path.display()))?;
                Ok(Cow::Owned(catalog))
            }
            None => Ok(Cow::Borrowed(Catalog::sample())),
        }
    }

    /// Random source for itinerary generation: seeded when a seed is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
