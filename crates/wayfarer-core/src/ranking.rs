//! Restaurant ordering for the restaurant view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{ParseLabelError, Restaurant};

/// Field a restaurant list is ranked by, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Rating,
    Reviews,
    GoogleRating,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Rating, Self::Reviews, Self::GoogleRating];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rating => "Overall Rating",
            Self::Reviews => "Customer Reviews",
            Self::GoogleRating => "Google Rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rating => "rating",
            Self::Reviews => "reviews",
            Self::GoogleRating => "google-rating",
        };
        f.write_str(s)
    }
}

impl FromStr for SortKey {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(Self::Rating),
            "reviews" => Ok(Self::Reviews),
            "google-rating" | "googleRating" => Ok(Self::GoogleRating),
            other => Err(ParseLabelError {
                kind: "sort key",
                value: other.to_owned(),
            }),
        }
    }
}

/// Return the restaurants ordered by `key`, highest first.
///
/// The sort is stable, so ties keep their catalog order. `restaurants` is
/// left untouched.
pub fn rank_restaurants(restaurants: &[Restaurant], key: SortKey) -> Vec<&Restaurant> {
    let mut ranked: Vec<&Restaurant> = restaurants.iter().collect();
    match key {
        SortKey::Rating => ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Reviews => ranked.sort_by(|a, b| b.customer_reviews.cmp(&a.customer_reviews)),
        SortKey::GoogleRating => ranked.sort_by(|a, b| b.google_rating.total_cmp(&a.google_rating)),
    }
    ranked
}

/// Star string for a rating: one star per whole point, plus a sparkle for
/// any fractional remainder.
pub fn rating_stars(rating: f64) -> String {
    let full = rating.max(0.0).floor() as usize;
    let mut stars = "⭐".repeat(full);
    if rating.fract() != 0.0 {
        stars.push('✨');
    }
    stars
}
