//! Error envelope for failures the service cannot answer.
//!
//! A missing user is not an `Error`: the lookup handler answers it with a
//! fixed plain-text 404. What remains is the store being unusable, which
//! clients see as a redacted `internal_error` carrying the request's trace
//! identifier.

use serde::Serialize;

use crate::domain::TraceId;

/// Message sent to clients in place of the internal cause.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An unexpected error occurred on the server.
    InternalError,
}

/// Error envelope serialised as `{"code","message","traceId"?}`.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::internal("user store unavailable");
/// assert_eq!(err.code(), ErrorCode::InternalError);
/// assert_eq!(err.redacted().message(), "Internal server error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Internal failure described by `message`, tagged with the current
    /// trace identifier when one is in scope.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier of the request that failed.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Client-facing copy: same code and trace id, cause replaced by
    /// [`REDACTED_MESSAGE`].
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            message: REDACTED_MESSAGE.to_owned(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
