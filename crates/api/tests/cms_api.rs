//! HTTP-level integration tests for the CMS sign-in area.

mod common;

use axum::http::StatusCode;
use sqlx::SqlitePool;

use folio_api::auth::password::hash_password;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_admin(pool: &SqlitePool, admin_name: &str, password: &str) {
    let password_hash = hash_password(password).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            admin_name: admin_name.to_string(),
            password_hash,
            image_url: None,
        },
    )
    .await
    .unwrap();
}

/// Sign in and return the session token.
async fn signin(pool: SqlitePool, admin_name: &str, password: &str) -> String {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/cms/signin",
        serde_json::json!({"admin_name": admin_name, "password": password}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    json["data"]["token"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Sign-in
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn signin_with_valid_credentials_issues_a_token(pool: SqlitePool) {
    seed_admin(&pool, "soca", "a-long-enough-password").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/cms/signin",
        serde_json::json!({"admin_name": "soca", "password": "a-long-enough-password"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["admin"]["admin_name"], "soca");
    // Sign-in records activity.
    assert!(json["data"]["admin"]["last_active_at"].is_string());

    // The password hash must never appear in the payload.
    assert!(json["data"]["admin"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signin_with_wrong_password_returns_401(pool: SqlitePool) {
    seed_admin(&pool, "soca", "a-long-enough-password").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/cms/signin",
        serde_json::json!({"admin_name": "soca", "password": "wrong"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signin_with_unknown_admin_returns_the_same_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/cms/signin",
        serde_json::json!({"admin_name": "nobody", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "Invalid admin name or password");
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_requires_a_session(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/cms").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = common::get_with_token(app, "/cms", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_returns_admin_and_counts(pool: SqlitePool) {
    seed_admin(&pool, "soca", "a-long-enough-password").await;
    let token = signin(pool.clone(), "soca", "a-long-enough-password").await;

    let app = common::build_test_app(pool);
    let response = common::get_with_token(app, "/cms", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["admin"]["admin_name"], "soca");
    assert_eq!(json["data"]["project_count"], 0);
    assert_eq!(json["data"]["image_count"], 0);
}

// ---------------------------------------------------------------------------
// Sign-out
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn signout_revokes_the_session(pool: SqlitePool) {
    seed_admin(&pool, "soca", "a-long-enough-password").await;
    let token = signin(pool.clone(), "soca", "a-long-enough-password").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_with_token(app, "/cms/signout", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The token must no longer authenticate.
    let app = common::build_test_app(pool);
    let response = common::get_with_token(app, "/cms", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Passcode stub
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn passcode_answers_501(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(app, "/cms/passcode", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "NOT_IMPLEMENTED");
}
