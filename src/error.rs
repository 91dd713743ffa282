//! Monitor error types with HTTP status code mapping.
//!
//! [`MonitorError`] is the central error type. Cycle-level failures
//! (`Query`) abort a refresh without touching the published snapshot;
//! row-level failures (`RowParse`) drop one record and let the cycle
//! proceed. The HTTP layer maps each variant to a status code and a
//! structured JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3001,
///     "message": "query failed: connection refused",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Central error enum for the queue monitor.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// One of the seven cycle queries failed or the store is unreachable.
    /// Aborts the whole cycle; retried on the next tick.
    #[error("query failed: {0}")]
    Query(String),

    /// A row's creation timestamp could not be parsed into a date.
    /// Drops that row only; the cycle proceeds.
    #[error("row {id}: cannot parse creation date from {value:?}")]
    RowParse {
        /// Ticket id of the offending row.
        id: i32,
        /// The raw timestamp string that failed to parse.
        value: String,
    },

    /// No refresh cycle has completed successfully yet.
    #[error("no snapshot published yet")]
    SnapshotUnavailable,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Config(_) => 1001,
            Self::RowParse { .. } => 1002,
            Self::SnapshotUnavailable => 2001,
            Self::Query(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::SnapshotUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Config(_) | Self::RowParse { .. } | Self::Query(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for MonitorError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_unavailable_maps_to_503() {
        assert_eq!(
            MonitorError::SnapshotUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn query_failure_maps_to_500() {
        let err = MonitorError::Query("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), 3001);
    }

    #[test]
    fn row_parse_message_names_the_row() {
        let err = MonitorError::RowParse {
            id: 42,
            value: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "row 42: cannot parse creation date from \"bogus\"");
    }
}
