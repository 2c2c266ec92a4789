/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory database setup with the full schema
/// - Router construction with a fixed test configuration
/// - Account registration and login through the real endpoints
/// - Request building helpers

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use sqlx::SqlitePool;
use tareas_api::app::{build_router, AppState};
use tareas_api::config::{ApiConfig, Config, DatabaseConfig as ApiDatabaseConfig, JwtConfig};
use tareas_shared::db::migrations::init_schema;
use tareas_shared::db::pool::{create_pool, DatabaseConfig};
use tower::Service as _;

/// Signing key used by every test context
pub const TEST_JWT_SECRET: &str = "test-secret-key";

/// Test context containing the app and its database
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    ///
    /// The pool is capped at one connection; with more, each connection
    /// would see its own empty in-memory database.
    pub async fn new() -> anyhow::Result<Self> {
        let db = create_pool(DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 5,
        })
        .await?;

        init_schema(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: ApiDatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a request through the router and returns the response
    pub async fn send(&mut self, request: Request<Body>) -> axum::response::Response {
        self.app
            .clone()
            .call(request)
            .await
            .expect("Request should not fail at the transport level")
    }

    /// Registers an account through the API and returns its token
    pub async fn register(&mut self, username: &str, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });

        let response = self
            .send(json_request("POST", "/auth/register", None, &body))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        json["token"]
            .as_str()
            .expect("Register response should carry a token")
            .to_string()
    }

    /// Creates a task for the given token and returns its id
    pub async fn create_task(&mut self, token: &str, titulo: &str) -> i64 {
        let body = serde_json::json!({ "titulo": titulo });

        let response = self
            .send(json_request("POST", "/tasks", Some(token), &body))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        json["task"]["id"]
            .as_i64()
            .expect("Create response should carry the task id")
    }
}

/// Builds a JSON request, optionally with a bearer token
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(body.to_string()))
        .expect("Request should build")
}

/// Builds a bodyless request, optionally with a bearer token
pub fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).expect("Request should build")
}

/// Reads a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Body should be readable");
    serde_json::from_slice(&bytes).expect("Body should be JSON")
}

/// Reads a response body as raw bytes
pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Body should be readable")
        .to_vec()
}
