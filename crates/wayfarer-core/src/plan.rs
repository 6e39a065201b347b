//! Trip requests as submitted from the entry form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ExplorationType;

/// Smallest trip length the entry form accepts.
pub const MIN_DAYS: u32 = 1;
/// Largest trip length the entry form accepts.
pub const MAX_DAYS: u32 = 30;
/// Trip length pre-filled on the entry form.
pub const DEFAULT_DAYS: u32 = 3;

/// Errors from building a [`TravelPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("destination must not be empty")]
    EmptyDestination,

    #[error("a trip must last at least {MIN_DAYS} day")]
    NoDays,
}

/// A submitted trip request. Immutable once built.
///
/// Deserializing goes through [`TravelPlan::new`], so a decoded plan holds
/// the same invariants as one built from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlanFields")]
pub struct TravelPlan {
    destination: String,
    days: u32,
    exploration_type: ExplorationType,
}

impl TravelPlan {
    /// Build a plan, trimming the destination.
    ///
    /// Fails when the destination is blank or `days` is zero. `days` above
    /// [`MAX_DAYS`] is accepted here; the form clamps before calling.
    pub fn new(
        destination: &str,
        days: u32,
        exploration_type: ExplorationType,
    ) -> Result<Self, PlanError> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(PlanError::EmptyDestination);
        }
        if days < MIN_DAYS {
            return Err(PlanError::NoDays);
        }
        Ok(Self {
            destination: destination.to_owned(),
            days,
            exploration_type,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn exploration_type(&self) -> ExplorationType {
        self.exploration_type
    }
}

/// Unchecked wire form of a [`TravelPlan`].
#[derive(Deserialize)]
struct PlanFields {
    destination: String,
    days: u32,
    exploration_type: ExplorationType,
}

impl TryFrom<PlanFields> for TravelPlan {
    type Error = PlanError;

    fn try_from(fields: PlanFields) -> Result<Self, Self::Error> {
        Self::new(&fields.destination, fields.days, fields.exploration_type)
    }
}

/// Clamp a day count typed into the form into `[MIN_DAYS, MAX_DAYS]`.
pub fn clamp_days(days: i64) -> u32 {
    // Both bounds fit in u32.
    days.clamp(i64::from(MIN_DAYS), i64::from(MAX_DAYS)) as u32
}

/// Parse the form's day field. Anything that isn't an integer counts as 1.
pub fn parse_days(input: &str) -> u32 {
    clamp_days(input.trim().parse::<i64>().unwrap_or(1))
}
