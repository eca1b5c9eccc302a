/**
 * Chat WebSocket Handler
 *
 * `GET /ws/{trip_id}/{client_id}` upgrades to a WebSocket that joins the
 * trip's chat.
 *
 * # Session Flow
 *
 * 1. Refuse the upgrade with 404 if the trip does not exist
 * 2. Register a bounded listener queue with the `ChatRegistry`
 * 3. Run two tasks until either ends:
 *    - writer: drains the queue into the socket
 *    - reader: stores each inbound text frame, then broadcasts it
 * 4. If the writer ended first, signal the reader and wait for it; the
 *    reader checks the signal only between frames
 * 5. Disconnect the listener from the registry
 *
 * The writer ends when the socket refuses a frame or when the registry
 * evicts the listener (its queue closes). The reader ends on a close frame
 * or a transport error.
 *
 * # Outbound Frame
 *
 * ```json
 * {"id": 12, "trip_id": 3, "sender": "alice", "content": "hi", "timestamp": "2025-06-01T09:30:00.5Z"}
 * ```
 *
 * Every listener of the trip receives it, including the sender. The echo is
 * how the sender learns the stored id and timestamp.
 */

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures_util::{SinkExt, Stream, StreamExt};
use sqlx::SqlitePool;
use tokio::sync::{mpsc, watch};

use crate::backend::chat::db::store_message;
use crate::backend::error::BackendError;
use crate::backend::realtime::ChatRegistry;
use crate::backend::server::state::AppState;
use crate::backend::trips::db::trip_exists;
use crate::shared::TripId;

/// Upgrade to a chat session for one trip
/// GET /ws/{trip_id}/{client_id}
pub async fn handle_chat_socket(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
    Path((trip_id, client_id)): Path<(TripId, String)>,
) -> Result<Response, BackendError> {
    if !trip_exists(&app_state.db_pool, trip_id).await? {
        return Err(BackendError::not_found("Trip", trip_id));
    }

    tracing::info!("[Chat] Client {} joining trip {}", client_id, trip_id);
    Ok(ws.on_upgrade(move |socket| run_chat_session(socket, app_state, trip_id, client_id)))
}

async fn run_chat_session(socket: WebSocket, app_state: AppState, trip_id: TripId, client_id: String) {
    let (mut sink, stream) = socket.split();
    let (tx, mut rx) = mpsc::channel::<String>(app_state.listener_buffer);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let registry = app_state.chat_registry.clone();
    let listener_id = registry.connect(trip_id, tx).await;

    let mut writer = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if let Err(e) = sink.send(WsMessage::Text(frame.into())).await {
                tracing::debug!("[Chat] Socket send failed: {}", e);
                break;
            }
        }
        let _ = sink.close().await;
    });

    let mut reader = tokio::spawn(pump_inbound(
        stream,
        shutdown_rx,
        app_state.db_pool.clone(),
        registry.clone(),
        trip_id,
        client_id.clone(),
    ));

    tokio::select! {
        _ = &mut writer => {
            // the reader finishes the frame it is relaying before it stops
            let _ = shutdown_tx.send(true);
            let _ = reader.await;
        }
        _ = &mut reader => writer.abort(),
    }

    registry.disconnect(trip_id, listener_id).await;
    tracing::info!("[Chat] Client {} left trip {}", client_id, trip_id);
}

/// Relay inbound text frames until the socket ends or shutdown is signalled
///
/// Shutdown is only observed between frames, so a message that has been
/// stored is always broadcast as well.
pub async fn pump_inbound<S>(
    mut stream: S,
    mut shutdown: watch::Receiver<bool>,
    pool: SqlitePool,
    registry: ChatRegistry,
    trip_id: TripId,
    sender: String,
) where
    S: Stream<Item = Result<WsMessage, axum::Error>> + Unpin,
{
    loop {
        let frame = tokio::select! {
            biased;
            frame = stream.next() => frame,
            _ = shutdown.wait_for(|stop| *stop) => break,
        };

        match frame {
            Some(Ok(WsMessage::Text(text))) => {
                if let Err(e) = relay_message(&pool, &registry, trip_id, &sender, text.as_str()).await {
                    tracing::warn!("[Chat] Dropped message from {} on trip {}: {}", sender, trip_id, e);
                }
            }
            Some(Ok(WsMessage::Close(_))) | None => break,
            // binary, ping and pong frames carry no chat content
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                tracing::debug!("[Chat] Socket read failed: {}", e);
                break;
            }
        }
    }
}

/// Persist one chat line, then fan it out
///
/// The store write is committed before anything is broadcast. A failed
/// broadcast does not undo it.
///
/// # Returns
///
/// Number of listeners the message reached
pub async fn relay_message(
    pool: &SqlitePool,
    registry: &ChatRegistry,
    trip_id: TripId,
    sender: &str,
    content: &str,
) -> Result<usize, BackendError> {
    let message = store_message(pool, trip_id, sender, content)
        .await?
        .ok_or_else(|| BackendError::not_found("Trip", trip_id))?;

    let frame = message.to_frame()?;
    Ok(registry.broadcast(trip_id, &frame).await)
}
