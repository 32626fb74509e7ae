//! Integration tests for request decoding failures.
//!
//! Every rejection must come back as a `{"detail": ...}` JSON body.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_returns_400_with_detail(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/customers/")
        .header("content-type", "application/json")
        .body(Body::from("{\"fname\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_content_type_returns_415(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/customers/")
        .body(Body::from(
            r#"{"fname":"A","lname":"B","email":"a@b.com","message":"hi"}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["detail"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_field_type_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/customers/",
        serde_json::json!({"fname": 1, "lname": "B", "email": "a@b.com", "message": "hi"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_id_returns_400_with_detail(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/customers/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsupported_method_returns_405(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::send(app, Method::PUT, "/customers/1").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
