//! Itinerary HTTP Handlers
//!
//! CRUD endpoints for trips, stops and activities. Payloads are validated
//! before the store is touched, and a missing parent is reported as 404
//! naming the entity. Bodies that fail to decode are taken as
//! `Result<Json<_>, JsonRejection>` so they answer with the same JSON
//! error body as everything else.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::BackendError;
use crate::shared::{Activity, ActivityId, NewActivity, NewStop, NewTrip, Stop, StopId, Trip, TripId};

/// Create a trip
/// POST /trip
pub async fn create_trip(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewTrip>, JsonRejection>,
) -> Result<Json<Trip>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let trip = db::create_trip(&pool, &request).await?;
    tracing::info!("[Trips] Created trip {} ({})", trip.id, trip.name);
    Ok(Json(trip))
}

/// List all trips with their stops and activities
/// GET /trips
pub async fn list_trips(State(pool): State<SqlitePool>) -> Result<Json<Vec<Trip>>, BackendError> {
    let trips = db::list_trips(&pool).await?;
    tracing::debug!("[Trips] Listed {} trips", trips.len());
    Ok(Json(trips))
}

/// Full itinerary of one trip
/// GET /trip/{trip_id}
pub async fn get_trip(
    State(pool): State<SqlitePool>,
    Path(trip_id): Path<TripId>,
) -> Result<Json<Trip>, BackendError> {
    db::get_trip(&pool, trip_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Trip", trip_id))
}

/// Delete a trip with everything it owns
/// DELETE /trip/{trip_id}
pub async fn delete_trip(
    State(pool): State<SqlitePool>,
    Path(trip_id): Path<TripId>,
) -> Result<StatusCode, BackendError> {
    if !db::delete_trip(&pool, trip_id).await? {
        return Err(BackendError::not_found("Trip", trip_id));
    }
    tracing::info!("[Trips] Deleted trip {}", trip_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Append a stop to a trip; `stop_order` is assigned by the store
/// POST /trip/{trip_id}/stop
pub async fn add_stop(
    State(pool): State<SqlitePool>,
    Path(trip_id): Path<TripId>,
    payload: Result<Json<NewStop>, JsonRejection>,
) -> Result<Json<Stop>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let stop = db::create_stop(&pool, trip_id, &request)
        .await?
        .ok_or_else(|| BackendError::not_found("Trip", trip_id))?;

    tracing::info!(
        "[Trips] Added stop {} ({}) to trip {} at position {}",
        stop.id,
        stop.city,
        trip_id,
        stop.stop_order
    );
    Ok(Json(stop))
}

/// One stop with its activities
/// GET /stop/{stop_id}
pub async fn get_stop(
    State(pool): State<SqlitePool>,
    Path(stop_id): Path<StopId>,
) -> Result<Json<Stop>, BackendError> {
    db::get_stop(&pool, stop_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Stop", stop_id))
}

/// DELETE /stop/{stop_id}
pub async fn delete_stop(
    State(pool): State<SqlitePool>,
    Path(stop_id): Path<StopId>,
) -> Result<StatusCode, BackendError> {
    if !db::delete_stop(&pool, stop_id).await? {
        return Err(BackendError::not_found("Stop", stop_id));
    }
    tracing::info!("[Trips] Deleted stop {}", stop_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Add an activity to a stop
/// POST /stop/{stop_id}/activity
pub async fn add_activity(
    State(pool): State<SqlitePool>,
    Path(stop_id): Path<StopId>,
    payload: Result<Json<NewActivity>, JsonRejection>,
) -> Result<Json<Activity>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let activity = db::create_activity(&pool, stop_id, &request)
        .await?
        .ok_or_else(|| BackendError::not_found("Stop", stop_id))?;

    tracing::info!("[Trips] Added activity {} to stop {}", activity.id, stop_id);
    Ok(Json(activity))
}

/// DELETE /activity/{activity_id}
pub async fn delete_activity(
    State(pool): State<SqlitePool>,
    Path(activity_id): Path<ActivityId>,
) -> Result<StatusCode, BackendError> {
    if !db::delete_activity(&pool, activity_id).await? {
        return Err(BackendError::not_found("Activity", activity_id));
    }
    Ok(StatusCode::NO_CONTENT)
}
