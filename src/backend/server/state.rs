/**
 * Application State Management
 *
 * This module defines the application state shared by every handler and
 * the `FromRef` implementations that let handlers extract only the part
 * they need.
 *
 * # Thread Safety
 *
 * - `SqlitePool` is internally reference-counted and thread-safe
 * - `ChatRegistry` wraps its groups in `Arc<RwLock<>>`
 * - `listener_buffer` is plain configuration
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // use the pool
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::realtime::ChatRegistry;
use crate::backend::server::config::ServerConfig;

/// Application state handed to the router
#[derive(Clone)]
pub struct AppState {
    /// Record store connection pool
    pub db_pool: SqlitePool,

    /// Listener groups for chat fan-out
    ///
    /// Owned here rather than as a global so that each server (and each test)
    /// has its own registry.
    pub chat_registry: ChatRegistry,

    /// Queue capacity for each chat listener
    pub listener_buffer: usize,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            chat_registry: ChatRegistry::new(config.listener_send_timeout),
            listener_buffer: config.listener_buffer,
        }
    }
}

/// Lets handlers extract `State<SqlitePool>` directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Lets handlers extract `State<ChatRegistry>` directly
impl FromRef<AppState> for ChatRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat_registry.clone()
    }
}
