//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - Itinerary, budget and suggestion endpoints
//! - **`chat_routes`** - Chat history and the WebSocket channel
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Itinerary and planning endpoints
//! └── chat_routes.rs  - Chat endpoints
//! ```
//!
//! # Route Types
//!
//! ## Itinerary
//!
//! - `POST /trip`, `GET /trips`, `GET /trip/{trip_id}`, `DELETE /trip/{trip_id}`
//! - `POST /trip/{trip_id}/stop`, `GET /stop/{stop_id}`, `DELETE /stop/{stop_id}`
//! - `POST /stop/{stop_id}/activity`, `DELETE /activity/{activity_id}`
//!
//! ## Planning
//!
//! - `GET /trip/{trip_id}/budget`
//! - `GET /suggestions?city=`
//!
//! ## Chat
//!
//! - `GET /trip/{trip_id}/messages`
//! - `GET /ws/{trip_id}/{client_id}` (WebSocket upgrade)
//!
//! # Example
//!
//! ```rust,no_run
//! use globetrotter::backend::routes::create_router;
//! use globetrotter::backend::server::{config::{connect_in_memory, ServerConfig}, AppState};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let pool = connect_in_memory().await?;
//! let app = create_router(AppState::new(pool, &ServerConfig::default()));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Chat routes
pub mod chat_routes;

/// Itinerary and planning routes
pub mod api_routes;

pub use router::create_router;
