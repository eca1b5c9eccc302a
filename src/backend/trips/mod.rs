//! Trips Module
//!
//! Storage and HTTP handlers for the trip → stop → activity hierarchy.
//!
//! - **`db`** - SQLite operations
//! - **`handlers`** - Axum handlers

pub mod db;
pub mod handlers;

pub use handlers::*;
