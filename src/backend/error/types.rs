/**
 * Backend Error Types
 *
 * This module defines the errors returned by HTTP handlers. Each variant maps
 * to one HTTP status code.
 *
 * # Error Categories
 *
 * ## Not Found
 *
 * A referenced trip, stop or activity does not exist. The message names the
 * entity and id, e.g. `Trip 7 not found`.
 *
 * ## Validation
 *
 * Request payloads that break a domain invariant. These come from
 * `SharedError::ValidationError` and are raised before any store mutation.
 *
 * ## Malformed Body
 *
 * A request body that is not JSON or does not match the payload shape.
 * axum's `JsonRejection` is wrapped so the caller sees the same JSON error
 * format as every other failure, with axum's status (400, 415 or 422).
 *
 * ## Database
 *
 * Failures reported by sqlx. The details are logged; callers see a 500.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use globetrotter::backend::error::BackendError;
///
/// let err = BackendError::not_found("Trip", 42);
/// assert_eq!(err.message(), "Trip 42 not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A referenced entity does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, e.g. "Trip"
        entity: &'static str,
        /// Requested id
        id: i64,
    },

    /// Shared error (validation or serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Record store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body could not be decoded
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl BackendError {
    /// Create a not-found error for `entity` with `id`
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 400 for validation, 500 for serialization
    /// - `InvalidBody` - status chosen by axum (400, 415 or 422)
    /// - `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message shown to the caller
    ///
    /// Database details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) => "Internal database error".to_string(),
            other => other.to_string(),
        }
    }
}
