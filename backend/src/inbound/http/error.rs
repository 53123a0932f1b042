//! HTTP rendering of [`Error`].
//!
//! Every `Error` reaching a handler boundary is an internal failure, so it
//! is answered with `500` and the redacted envelope. The cause is logged
//! here together with the trace id the client receives.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::UserQueryError;

/// Result alias for handlers that may fail internally.
pub type ApiResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.redacted())
    }
}

impl From<UserQueryError> for Error {
    fn from(err: UserQueryError) -> Self {
        let error = Error::internal(err.to_string());
        error!(
            error = %err,
            trace_id = error.trace_id().unwrap_or_default(),
            "user query failed"
        );
        error
    }
}

#[cfg(test)]
mod tests;
