//! Service entry-point: loads configuration, initialises logging and serves
//! the user lookup API.

mod server;

use std::env;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
#[cfg(feature = "metrics")]
use server::metrics::{METRICS_ENDPOINT, METRICS_NAMESPACE, initialize_metrics};
use server::{ServerConfig, create_server, drain_on_shutdown, startup_bind_addr};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = startup_bind_addr(env::args_os())?;

    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
            .endpoint(METRICS_ENDPOINT)
            .build()
    }));

    info!(%bind_addr, "user service starting");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_shutdown(health_state, tokio::signal::ctrl_c()));
    server.await
}
