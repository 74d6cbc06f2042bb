//! Tests for the operational endpoints.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{web, App};
use serde_json::Value;

use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::AppState;
use crate::inbound::http::test_utils::test_app;
use crate::server;

#[actix_web::test]
async fn ping_answers_pong_with_uptime_and_version() {
    let app = actix_test::init_service(test_app()).await;

    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/ping").to_request())
            .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "pong");
    assert_eq!(body["data"]["status"], "pong");
    assert!(body["data"]["uptime"].as_str().expect("uptime").ends_with('s'));
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn health_reports_a_connected_store() {
    let app = actix_test::init_service(test_app()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/health").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["database"]["status"], "connected");
    assert!(body["data"]["database"]["responseTime"].is_string());
}

#[actix_web::test]
async fn probes_answer_with_no_store_caching() {
    let app = actix_test::init_service(test_app()).await;

    for uri in ["/health/live", "/health/ready"] {
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK, "uri: {uri}");
        assert_eq!(
            res.headers()
                .get("cache-control")
                .expect("cache-control")
                .to_str()
                .expect("ascii"),
            "no-store"
        );
    }
}

#[actix_web::test]
async fn readiness_flips_from_503_to_200() {
    let health = web::Data::new(HealthState::new());
    let app = actix_test::init_service(
        App::new().configure(server::configure(AppState::in_memory(), health.clone())),
    )
    .await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    health.mark_ready();
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn liveness_fails_once_marked_unhealthy() {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let app = actix_test::init_service(
        App::new().configure(server::configure(AppState::in_memory(), health.clone())),
    )
    .await;

    health.mark_unhealthy();
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/live")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
