//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;

pub use config::{ServerConfig, startup_bind_addr};

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::future::Future;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::routes;
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = routes::app(health_state, http_state);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state, marked ready once the socket is bound.
/// - `config`: pre-built [`ServerConfig`] with the bind address, user store
///   and optional metrics.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        store,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    info!(users = store.len(), "user store seeded");
    let http_state = web::Data::new(HttpState::new(store));
    let server_health_state = health_state.clone();

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?;

    for addr in server.addrs() {
        info!(%addr, "listening");
    }

    let server = server.run();
    health_state.mark_ready();
    Ok(server)
}

/// Fail the liveness probe once `signal` resolves. A listener error leaves
/// the probe passing.
pub async fn drain_on_shutdown<F>(health_state: web::Data<HealthState>, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            health_state.mark_unhealthy();
            info!("shutdown requested; liveness probe now failing");
        }
        Err(error) => warn!(%error, "failed to listen for shutdown signal"),
    }
}
