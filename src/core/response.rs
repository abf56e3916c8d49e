//! The uniform `{ "status", "data" }` response envelope

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::ApiError;

/// JSON wrapper used for every HTTP response.
///
/// `status` is a machine-readable tag such as `success_order_created` or
/// `error_invalid_request_body`; `data` is the payload, `null`, or an error
/// message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Cow<'static, str>,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(status: &'static str, data: T) -> Self {
        Self {
            status: Cow::Borrowed(status),
            data,
        }
    }
}

impl Envelope<()> {
    /// Success without payload; `data` serializes as `null`.
    pub fn empty(status: &'static str) -> Self {
        Self::ok(status, ())
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// What every resource handler returns.
pub type ApiResult<T> = Result<Envelope<T>, ApiError>;

/// Payload for bulk deletes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Removed {
    pub removed: u64,
}
