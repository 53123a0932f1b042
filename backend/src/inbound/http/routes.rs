//! Route table and application factory shared by the binary and its
//! black-box tests.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::inbound::http::fallback::not_found;
use crate::inbound::http::health::{HealthState, health, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::get_user;

/// Register the lookup and health endpoints plus the plain-text fallback.
///
/// Resources inherit the fallback, so a non-GET request to a registered
/// path is answered with the same `404 page not found` as an unknown path.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_user)
        .service(health)
        .service(ready)
        .service(live)
        .default_service(web::to(not_found));
}

/// Build the traced application over the given shared state.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use backend::domain::UserStore;
/// use backend::inbound::http::health::HealthState;
/// use backend::inbound::http::routes::app;
/// use backend::inbound::http::state::HttpState;
///
/// let app = app(
///     web::Data::new(HealthState::new()),
///     web::Data::new(HttpState::new(Arc::new(UserStore::seeded()))),
/// );
/// ```
pub fn app(
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
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
}
