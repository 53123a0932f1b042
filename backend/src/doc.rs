//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user lookup and health endpoints together with
//! the schema wrappers from [`crate::inbound::http::schemas`]. Debug builds
//! serve it through Swagger UI; `cargo run --bin openapi-dump` prints it.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, HealthReportSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Read-only lookup of seeded user records plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, ErrorCodeSchema, HealthReportSchema)),
    tags(
        (name = "users", description = "User lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // utoipa replaces :: with . in schema names
    const USER_SCHEMA_NAME: &str = "crate.domain.User";
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    #[rstest]
    #[case("/users/{id}")]
    #[case("/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths.paths.contains_key(path),
            "missing path {path}"
        );
    }

    #[rstest]
    fn registers_domain_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key(USER_SCHEMA_NAME));
        assert!(schemas.contains_key(ERROR_SCHEMA_NAME));
    }

    #[rstest]
    fn serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("openapi json");
        assert!(json.contains("getUser"));
    }
}
