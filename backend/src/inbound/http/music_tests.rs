//! Tests for favourite music HTTP handlers.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{json, Value};

use crate::inbound::http::test_utils::test_app;

async fn create_song(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    owner: &str,
) -> Value {
    let req = actix_test::TestRequest::post()
        .uri("/api/music")
        .set_json(json!({
            "userId": owner,
            "musicName": "Song",
            "singer": "Artist",
            "reason": "x",
        }))
        .to_request();
    let res = actix_test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    actix_test::read_body_json(res).await
}

#[actix_web::test]
async fn create_then_list_round_trips_the_record() {
    let app = actix_test::init_service(test_app()).await;

    let created = create_song(&app, "u1").await;
    assert_eq!(created["success"], Value::Bool(true));
    let id = created["data"]["id"].as_str().expect("id");
    assert_eq!(id.len(), 24);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/music?userId=u1")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    let list = body["data"].as_array().expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], id);
    assert_eq!(list[0]["userId"], "u1");
    assert_eq!(list[0]["musicName"], "Song");
    assert_eq!(list[0]["singer"], "Artist");
    assert_eq!(list[0]["reason"], "x");
}

#[actix_web::test]
async fn create_reports_the_location_of_the_new_record() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/music")
        .set_json(json!({
            "userId": "u1",
            "musicName": "Song",
            "singer": "Artist",
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("ascii")
        .to_owned();
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        location,
        format!("/api/music/{}", body["data"]["id"].as_str().expect("id"))
    );
}

#[actix_web::test]
async fn create_lists_every_missing_field() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/music")
        .set_json(json!({ "reason": "x" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["success"], Value::Bool(false));
    let errors = body["errors"].as_array().expect("errors");
    assert!(errors.contains(&json!("userId is required")));
    assert!(errors.contains(&json!("musicName is required")));
    assert!(errors.contains(&json!("singer is required")));
}

#[actix_web::test]
async fn list_without_a_user_id_is_rejected() {
    let app = actix_test::init_service(test_app()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/music").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["success"], Value::Bool(false));
}

#[actix_web::test]
async fn list_for_an_owner_with_no_records_is_an_empty_success() {
    let app = actix_test::init_service(test_app()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/music?userId=nobody")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn malformed_and_unknown_ids_read_as_not_found() {
    let app = actix_test::init_service(test_app()).await;

    for uri in [
        "/api/music/not-an-object-id",
        "/api/music/ffffffffffffffffffffffff",
    ] {
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "uri: {uri}");
    }
}

#[actix_web::test]
async fn update_with_the_wrong_owner_is_forbidden_and_changes_nothing() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_song(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/music/{id}?userId=intruder"))
            .set_json(json!({ "musicName": "Hijack", "singer": "Nobody" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/music/{id}"))
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["musicName"], "Song");
}

#[actix_web::test]
async fn update_replaces_the_required_fields() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_song(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/music/{id}?userId=u1"))
            .set_json(json!({
                "musicName": "Other Song",
                "singer": "Other Artist",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["musicName"], "Other Song");
    assert_eq!(body["data"]["singer"], "Other Artist");
    assert_eq!(body["data"]["reason"], "x");
}

#[actix_web::test]
async fn update_requires_music_name_and_singer() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_song(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/music/{id}?userId=u1"))
            .set_json(json!({ "reason": "y" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    let errors = body["errors"].as_array().expect("errors");
    assert!(errors.contains(&json!("musicName is required")));
    assert!(errors.contains(&json!("singer is required")));
}

#[actix_web::test]
async fn delete_then_get_reads_as_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_song(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/music/{id}?userId=u1"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["deletedId"], id);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/music/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_without_a_user_id_is_rejected() {
    let app = actix_test::init_service(test_app()).await;
    let created = create_song(&app, "u1").await;
    let id = created["data"]["id"].as_str().expect("id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/music/{id}"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
