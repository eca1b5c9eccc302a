//! Planning Module
//!
//! Read-only endpoints computed from stored or static data: the derived
//! trip budget and activity suggestions.

pub mod handlers;

pub use handlers::*;
