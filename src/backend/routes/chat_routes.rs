/**
 * Chat Route Handlers
 *
 * # Routes
 *
 * - `GET /trip/{trip_id}/messages` - Stored history, oldest first
 * - `GET /ws/{trip_id}/{client_id}` - WebSocket chat channel
 *
 * The WebSocket route answers 404 without upgrading when the trip does
 * not exist.
 */

use axum::{routing::get, Router};

use crate::backend::chat::{get_trip_messages, handle_chat_socket};
use crate::backend::server::state::AppState;

/// Configure chat routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/trip/{trip_id}/messages", get(get_trip_messages))
        .route("/ws/{trip_id}/{client_id}", get(handle_chat_socket))
}
