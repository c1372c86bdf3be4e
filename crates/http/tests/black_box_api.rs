use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use outcome_core::{ErrorInfo, Outcome};
use outcome_http::app::build_app;
use outcome_http::catalog::Catalog;
use outcome_http::{Reply, StatusMapping};

fn app() -> Router {
    build_app(Arc::new(Catalog::new()), StatusMapping::default())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is not json")
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, _) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn created_item_is_returned_in_success_shape() {
    let app = app();

    let widget = Some(json!({ "name": "widget" }));
    let (status, body) = send(&app, Method::POST, "/items", widget).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "id": 1, "name": "widget" }, "error": null, "isSuccess": true })
    );

    let (status, body) = send(&app, Method::GET, "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "widget");
}

#[tokio::test]
async fn missing_item_maps_to_not_found() {
    let (status, body) = send(&app(), Method::GET, "/items/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "data": null,
            "error": { "code": "NotFound", "message": "Item 7 not found" },
            "isSuccess": false
        })
    );
}

#[tokio::test]
async fn blank_name_maps_to_bad_request() {
    let (status, body) = send(&app(), Method::POST, "/items", Some(json!({ "name": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "ValidationError");
    assert_eq!(body["isSuccess"], false);
}

#[tokio::test]
async fn duplicate_name_maps_to_conflict() {
    let app = app();
    send(&app, Method::POST, "/items", Some(json!({ "name": "widget" }))).await;

    let widget = Some(json!({ "name": "widget" }));
    let (status, body) = send(&app, Method::POST, "/items", widget).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "Conflict");
}

#[tokio::test]
async fn delete_returns_value_less_outcome() {
    let app = app();
    send(&app, Method::POST, "/items", Some(json!({ "name": "widget" }))).await;

    let (status, body) = send(&app, Method::DELETE, "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": null, "error": null, "isSuccess": true }));

    let (status, _) = send(&app, Method::DELETE, "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unrecognized_code_uses_configured_fallback() {
    let outcome: Outcome<u8> = Outcome::failure(ErrorInfo::new("RateLimited", "slow down"));

    let default = Reply::new(outcome.clone()).into_response();
    assert_eq!(default.status(), StatusCode::OK);

    let custom = Reply::new(outcome)
        .with_mapping(StatusMapping::with_fallback(StatusCode::TOO_MANY_REQUESTS))
        .into_response();
    assert_eq!(custom.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(custom).await["error"]["code"], "RateLimited");
}

#[tokio::test]
async fn internal_error_maps_to_server_error() {
    let outcome = Outcome::<()>::failure(ErrorInfo::internal("disk full"));
    let response = Reply::new(outcome).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
