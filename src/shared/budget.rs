//! Trip Budget Calculation
//!
//! The budget is derived, never stored. Every stop costs a fixed nightly
//! rate for each day of the visit plus the sum of its activities:
//!
//! ```text
//! stay_cost       = duration_days * DAILY_STAY_RATE
//! activities_cost = sum(activity.cost)
//! total           = stay_cost + activities_cost
//! total_budget    = sum(total) over all stops
//! ```

use serde::{Deserialize, Serialize};

use crate::shared::trip::{Stop, Trip, TripId};

/// Fixed stay cost per day, in currency units
pub const DAILY_STAY_RATE: f64 = 3000.0;

/// Cost breakdown of a single stop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopBudget {
    pub city: String,
    pub duration_days: i64,
    pub stay_cost: f64,
    pub activities_cost: f64,
    pub total: f64,
}

/// Budget of a whole trip, one breakdown entry per stop in stop order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripBudget {
    pub trip_id: TripId,
    pub total_budget: f64,
    pub breakdown: Vec<StopBudget>,
}

impl StopBudget {
    pub fn for_stop(stop: &Stop) -> Self {
        let stay_cost = stop.duration_days as f64 * DAILY_STAY_RATE;
        let activities_cost: f64 = stop.activities.iter().map(|activity| activity.cost).sum();

        Self {
            city: stop.city.clone(),
            duration_days: stop.duration_days,
            stay_cost,
            activities_cost,
            total: stay_cost + activities_cost,
        }
    }
}

/// Compute the budget of a trip with its stops and activities loaded
pub fn calculate_budget(trip: &Trip) -> TripBudget {
    let breakdown: Vec<StopBudget> = trip.stops.iter().map(StopBudget::for_stop).collect();
    let total_budget = breakdown.iter().map(|entry| entry.total).sum();

    TripBudget {
        trip_id: trip.id,
        total_budget,
        breakdown,
    }
}
