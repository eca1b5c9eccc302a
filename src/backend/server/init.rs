/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`:
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Create the `AppState` (pool plus an empty chat registry)
 * 3. Create and configure the router
 *
 * A store that cannot be opened is fatal. Chat listeners are never
 * restored across restarts; only stored messages survive.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the `sqlx::Error` raised while connecting or migrating.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing GlobeTrotter backend");

    let db_pool = load_database(config).await?;
    tracing::info!("[Server] Record store ready at {}", config.database_url);

    let app_state = AppState::new(db_pool, config);
    Ok(create_router(app_state))
}
