//! HTTP-level integration tests for the contact form.
//!
//! The test app has no mailer configured, so the success path stops at
//! the 503 gate; delivery itself is covered by the mailer unit tests.

mod common;

use axum::http::StatusCode;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_email_is_rejected_with_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/contact",
        serde_json::json!({
            "name": "Visitor",
            "email": "not-an-email",
            "message": "Hello!"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_message_is_rejected_with_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/contact",
        serde_json::json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": ""
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_submission_without_a_mailer_returns_503(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/contact",
        serde_json::json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": "I would like to talk about a project."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "MAIL_NOT_CONFIGURED");
}
