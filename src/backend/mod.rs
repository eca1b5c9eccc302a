//! Backend Module
//!
//! All server-side code for GlobeTrotter: an Axum HTTP server over a
//! SQLite record store, with a WebSocket chat channel per trip.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`trips`** - Trip, stop and activity storage and handlers
//! - **`planning`** - Budget and suggestion endpoints
//! - **`chat`** - Message persistence, history and WebSocket sessions
//! - **`realtime`** - Per-trip listener registry and fan-out
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── trips/          - Itinerary storage and handlers
//! ├── planning/       - Budget and suggestions
//! ├── chat/           - Chat persistence and handlers
//! ├── realtime/       - Listener registry
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the `SqlitePool`, the `ChatRegistry` and the listener
//! queue size. Handlers extract the piece they need through `FromRef`.
//! The registry keeps its groups behind `Arc<RwLock<>>`; each listener is a
//! bounded `tokio::sync::mpsc` queue.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Trips, stops and activities
pub mod trips;

/// Budget and suggestions
pub mod planning;

/// Trip chat
pub mod chat;

/// Listener registry for chat fan-out
pub mod realtime;

/// Backend-specific error types
pub mod error;

// Re-export commonly used items
pub use error::BackendError;
pub use realtime::ChatRegistry;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
