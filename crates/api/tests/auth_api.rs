//! HTTP-level tests for the auth gate and `GET /auth_token`.

mod common;

use axum::http::StatusCode;
use common::{basic_auth, body_json, get_auth, TEST_PASSWORD, TEST_USERNAME};
use sherlock_api::auth::token::issue_token;
use sherlock_db::models::user::CreateUser;
use sherlock_db::repositories::UserRepo;
use sqlx::PgPool;

/// Fetch a token with the test user's password.
async fn fetch_token(app: axum::Router) -> String {
    let response = get_auth(app, "/auth_token", &common::tester_auth()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn auth_token_returns_token_and_duration(pool: PgPool) {
    common::create_test_user(&pool, TEST_USERNAME).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/auth_token", &common::tester_auth()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["duration"], 600);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn token_replaces_username_and_password(pool: PgPool) {
    common::create_test_user(&pool, TEST_USERNAME).await;
    let app = common::build_test_app(pool);

    let token = fetch_token(app.clone()).await;

    // Password is ignored when the username slot holds a valid token.
    let response = get_auth(app.clone(), "/project/list", &basic_auth(&token, "unused")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/project/list", &format!("Bearer {token}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_is_rejected(pool: PgPool) {
    common::create_test_user(&pool, TEST_USERNAME).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/auth_token", &basic_auth(TEST_USERNAME, "nope")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn expired_token_is_rejected(pool: PgPool) {
    let user = common::create_test_user(&pool, TEST_USERNAME).await;
    let config = common::test_config();
    let expired = issue_token(user.id, -30, &config.token).unwrap();
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/project/list", &basic_auth(&expired, TEST_PASSWORD)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn token_for_deleted_user_is_rejected(pool: PgPool) {
    let config = common::test_config();
    let orphan = issue_token(987_654, 600, &config.token).unwrap();
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/project/list", &format!("Bearer {orphan}")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_seed_creates_user_once(pool: PgPool) {
    use sherlock_api::bootstrap::ensure_admin;
    use sherlock_api::config::AdminSeed;

    let seed = AdminSeed {
        username: "admin".into(),
        password: "s3cret-admin".into(),
    };

    assert!(ensure_admin(&pool, &seed).await.unwrap());
    assert!(!ensure_admin(&pool, &seed).await.unwrap());

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/auth_token", &basic_auth("admin", "s3cret-admin")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unusable_stored_hash_is_a_plain_401(pool: PgPool) {
    UserRepo::create(
        &pool,
        &CreateUser {
            username: "legacy".into(),
            password_hash: "not-a-phc-string".into(),
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/auth_token", &basic_auth("legacy", "whatever")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid credentials");
}
