//! Backend entry-point: wires the REST endpoints to the document store.

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use collecthub_backend::domain::ports::StoreHealth as _;
use collecthub_backend::inbound::http::health::HealthState;
use collecthub_backend::inbound::http::state::AppState;
use collecthub_backend::outbound::persistence::MongoStore;
use collecthub_backend::server::config::AppConfig;
use collecthub_backend::{server, RequestId};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let store = MongoStore::connect(&config.store)
        .await
        .map_err(std::io::Error::other)?;
    // The driver connects lazily; probe once so a misconfigured store is
    // visible in the logs immediately rather than on the first request.
    match store.ping().await {
        Ok(rtt) => info!(rtt = ?rtt, "document store reachable"),
        Err(e) => warn!(error = %e, "document store unreachable at startup; continuing"),
    }

    let state = AppState::mongo(&store);
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flip below is visible
    // to the probes.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .configure(server::configure(state.clone(), server_health_state.clone()))
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, "listening");
    server.run().await
}
