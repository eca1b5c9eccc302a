/**
 * Chat Message Data Structure
 *
 * This module defines the persisted chat entry of a trip. The same shape is
 * returned by the history endpoint and pushed over the chat WebSocket, so a
 * client can merge both sources without translation.
 *
 * Messages are append-only: the store assigns `id` and `timestamp` at write
 * time and never mutates them afterwards.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::trip::TripId;

/// Row id of a chat message
pub type MessageId = i64;

/// A stored chat entry
///
/// # Wire format
///
/// ```json
/// {"id": 1, "trip_id": 3, "sender": "alice", "content": "hi", "timestamp": "2025-06-01T09:30:00.123456Z"}
/// ```
///
/// `timestamp` is an ISO 8601 (RFC 3339) string in UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub trip_id: TripId,
    /// Client id the message was sent from
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Encode as the JSON text frame sent to listeners
    pub fn to_frame(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}
