//! Tests for favourite programming language HTTP handlers.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{json, Value};

use crate::inbound::http::test_utils::test_app;

async fn create_rust(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    owner: &str,
) -> Value {
    let req = actix_test::TestRequest::post()
        .uri("/api/programming-languages")
        .set_json(json!({
            "userId": owner,
            "languageName": "Rust",
            "useCase": "systems",
            "reason": "borrow checker",
        }))
        .to_request();
    let res = actix_test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    actix_test::read_body_json(res).await
}

#[actix_web::test]
async fn create_then_list_round_trips() {
    let app = actix_test::init_service(test_app()).await;
    create_rust(&app, "u1").await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/programming-languages?userId=u1")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    let list = body["data"].as_array().expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["languageName"], "Rust");
}

#[actix_web::test]
async fn update_requires_the_full_field_set() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_rust(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/programming-languages/{id}?userId=u1"))
            .set_json(json!({ "languageName": "Rust", "useCase": "cli" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    let errors = body["errors"].as_array().expect("errors");
    assert!(errors.contains(&json!("reason is required")));
}

#[actix_web::test]
async fn update_with_the_wrong_owner_is_forbidden() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_rust(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/programming-languages/{id}?userId=intruder"))
            .set_json(json!({
                "languageName": "Go",
                "useCase": "servers",
                "reason": "simplicity",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn delete_then_get_reads_as_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_rust(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/programming-languages/{id}?userId=u1"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/programming-languages/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
