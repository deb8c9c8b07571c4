#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use epms_api::auth::jwt::{generate_access_token, JwtConfig};
use epms_api::auth::password::hash_password;
use epms_api::config::{LogFormat, ServerConfig};
use epms_api::router::build_app_router;
use epms_api::state::AppState;
use epms_core::roles::Role;
use epms_db::models::employee::CreateEmployeeDetails;
use epms_db::models::user::CreateUser;
use epms_db::repositories::{EmployeeRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "integration-test-secret-of-adequate-length".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`], with a caller-supplied config.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token the test app will accept.
pub fn token_for(user_id: &str, role: Role) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation")
}

pub fn admin_token() -> String {
    token_for("ADMIN", Role::Admin)
}

pub fn manager_token(manager_id: &str) -> String {
    token_for(manager_id, Role::Manager)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Insert a login with [`TEST_PASSWORD`].
pub async fn seed_user(pool: &PgPool, user_id: &str, role: Role) {
    UserRepo::create(
        pool,
        &CreateUser {
            user_id: user_id.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
            role: role.as_str().to_string(),
            first_name: format!("{user_id}-first"),
            last_name: format!("{user_id}-last"),
            email: None,
        },
    )
    .await
    .expect("user insert should succeed");
}

/// Map a login to an employee record, returning its EmpID.
pub async fn seed_employee(pool: &PgPool, user_id: &str, manager_id: Option<&str>) -> i64 {
    EmployeeRepo::create(
        pool,
        &CreateEmployeeDetails {
            user_id: user_id.to_string(),
            dept_id: None,
            manager_id: manager_id.map(str::to_string),
            job_title: None,
        },
    )
    .await
    .expect("employee insert should succeed")
    .id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, "GET", uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "POST", uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "PUT", uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, "DELETE", uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and the `{ error, code }` body of an error response.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected body: {json}");
    json["error"].as_str().unwrap_or_default().to_string()
}
