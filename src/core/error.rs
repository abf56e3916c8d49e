//! Typed error handling for the shop backend
//!
//! Two layers of errors exist:
//!
//! - [`StoreError`]: what a storage backend reports. Backends never return
//!   zero-valued records for missing rows; they return `None`/`false`, and
//!   this type only covers genuine failures.
//! - [`ApiError`]: what an HTTP handler returns. It carries the status code,
//!   the machine-readable status tag and a human-readable message, and
//!   renders as the uniform `{ "status", "data" }` envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! let order = state
//!     .service
//!     .get(id)
//!     .await
//!     .map_err(|e| ApiError::from_store("error_get_order", e))?
//!     .ok_or_else(|| ApiError::not_found("order"))?;
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use thiserror::Error;

use super::response::Envelope;

/// Result alias used by every store trait.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input was understood but cannot be applied (e.g. a product
    /// without a price in an order).
    #[error("{0}")]
    Invalid(String),

    /// A uniqueness constraint was violated.
    #[error("{0}")]
    Conflict(String),

    /// Database driver failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Anything else that should not happen in normal operation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Invalid(_) => StatusCode::BAD_REQUEST,
            StoreError::Conflict(_) => StatusCode::CONFLICT,
            #[cfg(feature = "postgres")]
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand used by the in-memory backend when a lock is poisoned.
    pub(crate) fn poisoned<E: std::fmt::Display>(err: E) -> Self {
        StoreError::Internal(format!("storage lock poisoned: {}", err))
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let code = err
            .as_database_error()
            .and_then(|db| db.code())
            .map(|code| code.into_owned());

        match code.as_deref() {
            // unique_violation
            Some("23505") => StoreError::Conflict(err.to_string()),
            // numeric_value_out_of_range
            Some("22003") => StoreError::Invalid(err.to_string()),
            _ => StoreError::Database(err),
        }
    }
}

// =============================================================================
// HTTP errors
// =============================================================================

/// Error returned by HTTP handlers.
///
/// Renders as `{ "status": <tag>, "data": <message> }` with the carried
/// status code.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub tag: Cow<'static, str>,
    pub message: String,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        tag: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// 400 with the given tag
    pub fn bad_request(tag: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, tag, message)
    }

    /// 404 tagged `error_<entity>_not_found`
    pub fn not_found(entity: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("error_{}_not_found", entity),
            format!("{} not found", entity.replace('_', " ")),
        )
    }

    /// Body could not be parsed into the expected shape
    pub fn invalid_body() -> Self {
        Self::bad_request("error_invalid_request_body", "Invalid request body")
    }

    /// Convert a storage failure, tagging it with the failing operation.
    ///
    /// The failure is logged here so handlers don't each repeat it.
    pub fn from_store(tag: &'static str, err: StoreError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!(tag, error = %err, "storage operation failed");
        } else {
            tracing::warn!(tag, error = %err, "storage operation rejected");
        }
        Self::new(status, tag, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.tag, self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope {
            status: self.tag,
            data: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
