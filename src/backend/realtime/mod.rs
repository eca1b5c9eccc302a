//! Real-time Module
//!
//! In-memory fan-out of chat messages to the listeners connected to each
//! trip. The registry lives in `AppState` and its lifetime is the server
//! process; nothing here is persisted.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs       - Module exports and documentation
//! └── registry.rs  - Per-trip listener groups and broadcast
//! ```

/// Per-trip listener registry
pub mod registry;

pub use registry::{ChatRegistry, ListenerHandle, ListenerId};
