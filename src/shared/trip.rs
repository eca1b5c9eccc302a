/**
 * Itinerary Data Structures
 *
 * A `Trip` is the aggregate root of the itinerary. It exclusively owns its
 * stops, and each `Stop` exclusively owns its activities. Child collections
 * are plain vectors that start out empty, so a freshly created trip is
 * serialized with `"stops": []`.
 *
 * The `New*` types are the request payloads. Each one checks its own
 * invariants in `validate()` and must pass before anything is written.
 */
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Row id of a trip
pub type TripId = i64;
/// Row id of a stop
pub type StopId = i64;
/// Row id of an activity
pub type ActivityId = i64;

/// Largest cost accepted for a single activity
///
/// Keeps every budget sum finite, so totals always serialize as numbers.
pub const MAX_ACTIVITY_COST: f64 = 1_000_000_000.0;

/// A multi-city journey with a date range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Stops in ascending `stop_order`
    #[serde(default)]
    pub stops: Vec<Stop>,
}

impl Trip {
    /// Build a trip with no stops
    pub fn new(id: TripId, name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            start_date,
            end_date,
            stops: Vec::new(),
        }
    }
}

/// A city visit within a trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub trip_id: TripId,
    pub city: String,
    pub duration_days: i64,
    /// 1-based creation sequence within the trip; never renumbered
    pub stop_order: i64,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Stop {
    /// Build a stop with no activities
    pub fn new(id: StopId, trip_id: TripId, city: String, duration_days: i64, stop_order: i64) -> Self {
        Self {
            id,
            trip_id,
            city,
            duration_days,
            stop_order,
            activities: Vec::new(),
        }
    }
}

/// A costed item scheduled within a stop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub stop_id: StopId,
    pub name: String,
    pub cost: f64,
}

/// Payload for `POST /trip`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewTrip {
    /// The trip must end strictly after it starts
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.end_date <= self.start_date {
            return Err(SharedError::validation(
                "end_date",
                "end_date must be after start_date",
            ));
        }
        Ok(())
    }
}

/// Payload for `POST /trip/{id}/stop`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStop {
    pub city: String,
    pub duration_days: i64,
}

impl NewStop {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.duration_days <= 0 {
            return Err(SharedError::validation(
                "duration_days",
                "duration_days must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Payload for `POST /stop/{id}/activity`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewActivity {
    pub name: String,
    pub cost: f64,
}

impl NewActivity {
    pub fn validate(&self) -> Result<(), SharedError> {
        // NaN fails both comparisons, so check finiteness first
        if !self.cost.is_finite() {
            return Err(SharedError::validation("cost", "cost must be a finite number"));
        }
        if self.cost < 0.0 {
            return Err(SharedError::validation(
                "cost",
                "cost must be greater than or equal to 0",
            ));
        }
        if self.cost > MAX_ACTIVITY_COST {
            return Err(SharedError::validation(
                "cost",
                format!("cost must not exceed {}", MAX_ACTIVITY_COST),
            ));
        }
        Ok(())
    }
}
