//! Chat Backend Module
//!
//! Server-side chat for trips:
//! - Message persistence (append-only, ordered by timestamp)
//! - History endpoint
//! - WebSocket sessions that store each line and fan it out through
//!   `realtime::ChatRegistry`
//!
//! # Architecture
//!
//! - **`db`** - Database operations for messages
//! - **`handlers`** - History and WebSocket handlers

/// Database operations for chat messages
pub mod db;

/// Chat handlers
pub mod handlers;

/// Re-export commonly used handlers
pub use handlers::{get_trip_messages, handle_chat_socket};
