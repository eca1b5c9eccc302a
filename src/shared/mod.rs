//! Shared Module
//!
//! This module contains the itinerary domain: entity types, request payloads
//! with their validation, and the two pure calculators (budget and
//! suggestions). Nothing here depends on the HTTP server or the database, so
//! it compiles without the `ssr` feature.

/// Trips, stops and activities
pub mod trip;

/// Chat message data structure
pub mod message;

/// Derived trip budget
pub mod budget;

/// Static activity suggestions
pub mod suggestions;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use trip::{
    Activity, ActivityId, NewActivity, NewStop, NewTrip, Stop, StopId, Trip, TripId, MAX_ACTIVITY_COST,
};
pub use message::{ChatMessage, MessageId};
pub use budget::{calculate_budget, StopBudget, TripBudget, DAILY_STAY_RATE};
pub use suggestions::{suggestions_for, SuggestionItem};
pub use error::SharedError;
