//! Axum extractors and path helpers
//!
//! Handlers never use `axum::Json` directly as an extractor: its rejection
//! is a plain-text body. [`JsonBody`] maps every rejection onto the envelope
//! with `error_invalid_request_body`.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor whose rejection is an [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                Err(ApiError::invalid_body())
            }
        }
    }
}

/// Parse a numeric path segment.
///
/// `what` names the parameter for the error tag and message, e.g. `"order"`
/// yields `error_invalid_order_id` / `Invalid order ID`.
pub fn parse_id(raw: &str, what: &'static str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| {
        ApiError::new(
            axum::http::StatusCode::BAD_REQUEST,
            format!("error_invalid_{}_id", what),
            format!("Invalid {} ID", what.replace('_', " ")),
        )
    })
}
