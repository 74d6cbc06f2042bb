//! Test helpers for inbound HTTP components.

use actix_web::{web, App};

use super::health::HealthState;
use super::state::AppState;
use crate::server;

/// Build an app over in-memory adapters with the full production route
/// table, so handler tests exercise the real wiring.
pub fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new().configure(server::configure(AppState::in_memory(), health))
}
