//! Chat integration tests
//!
//! Runs the router on a local port and talks to it with a
//! tokio-tungstenite client, the way a browser would.

use std::time::Duration;

use axum::http::StatusCode;
use futures_util::{SinkExt, StreamExt};
use pretty_assertions::assert_eq;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
    MaybeTlsStream, WebSocketStream,
};

use crate::common::{RunningServer, TestApp};
use globetrotter::shared::{ChatMessage, TripId};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn join(server: &RunningServer, trip_id: TripId, client_id: &str) -> Client {
    let (socket, response) = assert_ok!(
        connect_async(server.ws_url(trip_id, client_id)).await,
        "websocket handshake"
    );
    assert_eq!(response.status(), StatusCode::SWITCHING_PROTOCOLS);
    socket
}

async fn say(client: &mut Client, text: &str) {
    assert_ok!(client.send(Message::Text(text.into())).await);
}

/// Next chat frame, skipping control frames
async fn next_message(client: &mut Client) -> ChatMessage {
    let frame = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match client.next().await {
                Some(Ok(Message::Text(text))) => break text,
                Some(Ok(_)) => continue,
                other => panic!("socket ended: {:?}", other),
            }
        }
    })
    .await
    .expect("timed out waiting for a chat frame");

    assert_ok!(serde_json::from_str(frame.as_str()), "chat frame")
}

/// True when nothing arrives within the window
async fn stays_silent(client: &mut Client, window: Duration) -> bool {
    tokio::time::timeout(window, client.next()).await.is_err()
}

#[tokio::test]
async fn test_sender_receives_own_message() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Japan Trip", "2025-06-01", "2025-06-10").await;
    let server = app.spawn().await;

    let mut alice = join(&server, trip_id, "alice").await;
    server.wait_for_listeners(trip_id, 1).await;

    say(&mut alice, "Anyone booked the ryokan?").await;
    let echoed = next_message(&mut alice).await;

    assert_eq!(echoed.trip_id, trip_id);
    assert_eq!(echoed.sender, "alice");
    assert_eq!(echoed.content, "Anyone booked the ryokan?");
}

#[tokio::test]
async fn test_message_reaches_everyone_and_history() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Japan Trip", "2025-06-01", "2025-06-10").await;
    let server = app.spawn().await;

    let mut alice = join(&server, trip_id, "alice").await;
    let mut bob = join(&server, trip_id, "bob").await;
    server.wait_for_listeners(trip_id, 2).await;

    say(&mut alice, "Tokyo first").await;
    let to_alice = next_message(&mut alice).await;
    let to_bob = next_message(&mut bob).await;
    assert_eq!(to_alice, to_bob);

    say(&mut bob, "Then Kyoto").await;
    let second = next_message(&mut alice).await;
    assert_eq!(second.sender, "bob");
    assert_eq!(next_message(&mut bob).await, second);

    let history = server.app.get(&format!("/trip/{}/messages", trip_id)).await;
    assert_status!(history, StatusCode::OK);
    let history: Vec<ChatMessage> = history.json();
    assert_eq!(history, vec![to_alice, second]);
}

#[tokio::test]
async fn test_trips_are_isolated() {
    let app = TestApp::new().await;
    let japan = app.create_trip("Japan Trip", "2025-06-01", "2025-06-10").await;
    let italy = app.create_trip("Italy", "2025-09-01", "2025-09-08").await;
    let server = app.spawn().await;

    let mut alice = join(&server, japan, "alice").await;
    let mut carol = join(&server, italy, "carol").await;
    server.wait_for_listeners(japan, 1).await;
    server.wait_for_listeners(italy, 1).await;

    say(&mut alice, "Only for Japan").await;
    next_message(&mut alice).await;

    assert!(stays_silent(&mut carol, Duration::from_millis(200)).await);

    let italy_history: Vec<ChatMessage> = server.app.get(&format!("/trip/{}/messages", italy)).await.json();
    assert!(italy_history.is_empty());
}

#[tokio::test]
async fn test_late_joiner_gets_only_new_messages() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Japan Trip", "2025-06-01", "2025-06-10").await;
    let server = app.spawn().await;

    let mut alice = join(&server, trip_id, "alice").await;
    server.wait_for_listeners(trip_id, 1).await;
    say(&mut alice, "before dave").await;
    next_message(&mut alice).await;

    let mut dave = join(&server, trip_id, "dave").await;
    server.wait_for_listeners(trip_id, 2).await;
    say(&mut alice, "after dave").await;

    let first_for_dave = next_message(&mut dave).await;
    assert_eq!(first_for_dave.content, "after dave");

    // missed lines are still in the history
    let history: Vec<ChatMessage> = server.app.get(&format!("/trip/{}/messages", trip_id)).await.json();
    let contents: Vec<&str> = history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["before dave", "after dave"]);
}

#[tokio::test]
async fn test_closing_socket_leaves_group() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Japan Trip", "2025-06-01", "2025-06-10").await;
    let server = app.spawn().await;

    let mut alice = join(&server, trip_id, "alice").await;
    let bob = join(&server, trip_id, "bob").await;
    server.wait_for_listeners(trip_id, 2).await;

    drop(bob);
    server.wait_for_listeners(trip_id, 1).await;

    say(&mut alice, "still here").await;
    assert_eq!(next_message(&mut alice).await.content, "still here");

    assert_ok!(alice.close(None).await);
    server.wait_for_listeners(trip_id, 0).await;
}

#[tokio::test]
async fn test_missing_trip_is_refused_before_upgrade() {
    let server = TestApp::new().await.spawn().await;

    let err = connect_async(server.ws_url(99, "alice"))
        .await
        .err()
        .expect("handshake should fail");

    match err {
        tungstenite::Error::Http(response) => assert_eq!(response.status(), StatusCode::NOT_FOUND),
        other => panic!("expected HTTP error, got {:?}", other),
    }
    assert_eq!(server.app.registry.group_count().await, 0);
}
