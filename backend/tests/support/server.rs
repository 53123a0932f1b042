//! Spawns the user service on an ephemeral port for black-box tests.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{HttpServer, web};
use backend::domain::UserStore;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::routes;
use backend::inbound::http::state::HttpState;

/// Running server plus the handle used to stop it.
pub(crate) struct SpawnedServer {
    pub(crate) base_url: String,
    pub(crate) handle: ServerHandle,
}

/// Bind the seeded service to `127.0.0.1:0` with several workers.
///
/// Must be called from inside an Actix system.
pub(crate) fn spawn_seeded_server(workers: usize) -> Result<SpawnedServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_state = web::Data::new(HttpState::new(Arc::new(UserStore::seeded())));
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();

    let server = HttpServer::new(move || routes::app(health_state.clone(), http_state.clone()))
        .disable_signals()
        .workers(workers)
        .listen(listener)
        .map_err(|err| err.to_string())?
        .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok(SpawnedServer {
        base_url: format!("http://{addr}"),
        handle,
    })
}
