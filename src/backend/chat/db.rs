/**
 * Database Operations for Chat Messages
 *
 * Messages are append-only. The timestamp is taken when the row is written,
 * and history is read back in ascending timestamp order with the row id as
 * tie-breaker.
 */

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::shared::{ChatMessage, TripId};

fn message_from_row(row: &SqliteRow) -> Result<ChatMessage, sqlx::Error> {
    Ok(ChatMessage {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        sender: row.try_get("sender")?,
        content: row.try_get("content")?,
        timestamp: row.try_get("timestamp")?,
    })
}

/// Save a chat message for a trip
///
/// # Returns
/// The stored message with its id and timestamp, or `None` when the trip
/// does not exist.
pub async fn store_message(
    pool: &SqlitePool,
    trip_id: TripId,
    sender: &str,
    content: &str,
) -> Result<Option<ChatMessage>, sqlx::Error> {
    let timestamp = Utc::now();

    let row = sqlx::query(
        r#"
        INSERT INTO messages (trip_id, sender, content, timestamp)
        SELECT id, ?, ?, ? FROM trips WHERE id = ?
        RETURNING id, trip_id, sender, content, timestamp
        "#,
    )
    .bind(sender)
    .bind(content)
    .bind(timestamp)
    .bind(trip_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(message_from_row).transpose()
}

/// Load the chat history of a trip, oldest first
pub async fn get_messages_for_trip(
    pool: &SqlitePool,
    trip_id: TripId,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT id, trip_id, sender, content, timestamp
        FROM messages
        WHERE trip_id = ?
        ORDER BY timestamp ASC, id ASC
        "#,
    )
    .bind(trip_id)
    .fetch_all(pool)
    .await?
    .iter()
    .map(message_from_row)
    .collect()
}
