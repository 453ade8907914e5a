//! Malformed, mistyped and blank request bodies through the router.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use common::TestApp;
use serde_json::{Value, json};

fn assert_validation_error(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn blank_service_dates_store_as_null() {
    let app = TestApp::new();
    let token = app.signup("Alice", "alice@x.com", "pw1").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/vehicles",
            Some(&token),
            Some(json!({
                "model": "Civic",
                "plate": "ABC-1234",
                "year": null,
                "color": "",
                "lastService": "",
                "nextService": ""
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "body: {body}");
    assert!(body["lastServiceDate"].is_null());
    assert!(body["nextServiceDate"].is_null());
    assert!(body["year"].is_null());
}

#[tokio::test]
async fn out_of_range_service_date_is_a_validation_error() {
    let app = TestApp::new();
    let token = app.signup("Alice", "alice@x.com", "pw1").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/vehicles",
            Some(&token),
            Some(json!({
                "model": "Civic",
                "plate": "ABC-1234",
                "lastServiceDate": "2024-13-45"
            })),
        )
        .await;
    assert_validation_error(status, &body);

    let (_, list) = app.send(Method::GET, "/vehicles", Some(&token), None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn null_login_fields_are_a_validation_error() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/login",
            None,
            Some(json!({"email": null, "password": null})),
        )
        .await;
    assert_validation_error(status, &body);
}

#[tokio::test]
async fn null_register_fields_are_a_validation_error() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({"name": null, "email": "alice@x.com", "password": "pw1"})),
        )
        .await;
    assert_validation_error(status, &body);
}

#[tokio::test]
async fn wrongly_typed_field_is_a_validation_error() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({"name": 5, "email": "alice@x.com", "password": "pw1"})),
        )
        .await;
    assert_validation_error(status, &body);
}

#[tokio::test]
async fn missing_content_type_is_a_validation_error() {
    let app = TestApp::new();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .body(Body::from(
            json!({"email": "alice@x.com", "password": "pw1"}).to_string(),
        ))
        .unwrap();
    let (status, body) = app.send_raw(req).await;
    assert_validation_error(status, &body);
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let app = TestApp::new();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send_raw(req).await;
    assert_validation_error(status, &body);
}
