//! Chat Handlers Module
//!
//! Axum handlers for the per-trip chat.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── history.rs  - GET /trip/{trip_id}/messages
//! └── socket.rs   - GET /ws/{trip_id}/{client_id} (WebSocket)
//! ```

/// Stored message history
pub mod history;

/// Live chat over WebSocket
pub mod socket;

pub use history::get_trip_messages;
pub use socket::{handle_chat_socket, relay_message};
