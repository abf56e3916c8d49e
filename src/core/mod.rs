//! Core building blocks shared by every resource

pub mod error;
pub mod extractors;
pub mod response;

pub use error::{ApiError, StoreError, StoreResult};
pub use extractors::{JsonBody, parse_id};
pub use response::{ApiResult, Envelope, Removed};
