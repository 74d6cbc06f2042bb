//! Tests for mobile app HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{json, Value};

use crate::inbound::http::test_utils::test_app;

#[actix_web::test]
async fn platform_is_canonicalised_on_create() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/mobile-apps")
        .set_json(json!({
            "userId": "u1",
            "appName": "Signal",
            "platform": "android",
            "category": "messaging",
            "reason": "privacy",
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["platform"], "Android");
}

#[actix_web::test]
async fn unknown_platforms_are_rejected() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/mobile-apps")
        .set_json(json!({
            "userId": "u1",
            "appName": "Solitaire",
            "platform": "windows",
            "category": "games",
            "reason": "nostalgia",
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    let errors = body["errors"].as_array().expect("errors");
    assert!(errors.contains(&json!("platform must be one of: Android, iOS")));
}

#[actix_web::test]
async fn update_canonicalises_the_platform_too() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/mobile-apps")
        .set_json(json!({
            "userId": "u1",
            "appName": "Signal",
            "platform": "Android",
            "category": "messaging",
            "reason": "privacy",
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    let created: Value = actix_test::read_body_json(res).await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/mobile-apps/{id}?userId=u1"))
            .set_json(json!({ "platform": "IOS" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["platform"], "iOS");
    assert_eq!(body["data"]["appName"], "Signal");
}
