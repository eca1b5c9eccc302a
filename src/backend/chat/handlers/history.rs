//! Chat history handler

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use crate::backend::chat::db::get_messages_for_trip;
use crate::backend::error::BackendError;
use crate::backend::trips::db::trip_exists;
use crate::shared::{ChatMessage, TripId};

/// Messages of a trip, oldest first
/// GET /trip/{trip_id}/messages
pub async fn get_trip_messages(
    State(pool): State<SqlitePool>,
    Path(trip_id): Path<TripId>,
) -> Result<Json<Vec<ChatMessage>>, BackendError> {
    if !trip_exists(&pool, trip_id).await? {
        return Err(BackendError::not_found("Trip", trip_id));
    }

    let messages = get_messages_for_trip(&pool, trip_id).await?;
    tracing::debug!("[Chat] Loaded {} messages for trip {}", messages.len(), trip_id);
    Ok(Json(messages))
}
