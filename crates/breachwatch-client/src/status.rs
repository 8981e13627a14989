//! Mapping from HTTP status to lookup outcome.

use crate::error::LookupError;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use std::time::Duration;

/// Outcome of a response, decided from its status alone.
#[derive(Debug)]
pub enum StatusClass {
    /// 200: the body carries data and must be decoded
    Success,
    /// 404: the service has nothing for this identifier
    NoData,
    /// Any other status, already turned into an error
    Failed(LookupError),
}

/// Classify a response status.
///
/// `retry_after` is only used for 429 responses.
#[must_use]
pub fn classify(status: StatusCode, retry_after: Option<Duration>) -> StatusClass {
    match status {
        StatusCode::OK => StatusClass::Success,
        StatusCode::NOT_FOUND => StatusClass::NoData,
        StatusCode::BAD_REQUEST => StatusClass::Failed(LookupError::InvalidFormat),
        StatusCode::UNAUTHORIZED => StatusClass::Failed(LookupError::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => {
            StatusClass::Failed(LookupError::RateLimited { retry_after })
        }
        other => StatusClass::Failed(LookupError::UnexpectedStatus {
            status: other.as_u16(),
        }),
    }
}

/// Read a `Retry-After` header given in whole seconds.
///
/// HTTP-date values are not used by the service and yield `None`.
#[must_use]
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
        .map(Duration::from_secs)
}
