//! Planning HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::trips::db;
use crate::shared::{calculate_budget, suggestions_for, SuggestionItem, TripBudget, TripId};

/// Budget breakdown of a trip
/// GET /trip/{trip_id}/budget
pub async fn get_trip_budget(
    State(pool): State<SqlitePool>,
    Path(trip_id): Path<TripId>,
) -> Result<Json<TripBudget>, BackendError> {
    let trip = db::get_trip(&pool, trip_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Trip", trip_id))?;

    let budget = calculate_budget(&trip);
    tracing::debug!("[Planning] Trip {} budget {}", trip_id, budget.total_budget);
    Ok(Json(budget))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub city: String,
}

/// Suggested activities for a city; always succeeds
/// GET /suggestions?city=
pub async fn get_suggestions(Query(query): Query<SuggestionQuery>) -> Json<Vec<SuggestionItem>> {
    Json(suggestions_for(&query.city))
}
