//! GlobeTrotter - Trip Planning Backend
//!
//! GlobeTrotter stores trips made of ordered stops, each holding costed
//! activities. It derives a per-trip budget, suggests activities for a
//! destination, and runs a per-trip chat whose messages are persisted and
//! fanned out live to everyone viewing the same trip.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types and pure logic
//!   - Trip / Stop / Activity / ChatMessage
//!   - Request payloads and their validation
//!   - Budget calculation and suggestion lookup
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP + WebSocket server
//!   - SQLite persistence through sqlx
//!   - Chat fan-out registry
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use globetrotter::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Domain types and pure logic
pub mod shared;

/// Server-side code
#[cfg(feature = "ssr")]
pub mod backend;
