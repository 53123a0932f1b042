//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa derives; these wrappers mirror their wire
//! shape and live in the inbound adapter where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "internal_error")]
    code: ErrorCodeSchema,
    /// Always the redacted message.
    #[schema(example = "Internal server error")]
    message: String,
    /// Trace identifier of the failed request, echoed in the `trace-id`
    /// header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(example = "1")]
    id: String,
    /// Contact email address.
    #[schema(example = "raul@example.com")]
    email: String,
    /// Display name.
    #[schema(example = "Raul Oguns")]
    name: String,
}

/// OpenAPI schema for the `GET /health` body.
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::health::HealthReport)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HealthReportSchema {
    /// Always `healthy`.
    #[schema(example = "healthy")]
    status: String,
}
