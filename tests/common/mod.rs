//! Shared test fixtures
//!
//! Spins up the full application against an in-memory SQLite database so
//! end-to-end tests exercise the real router, middleware, and handlers.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use chirper::auth::tokens::JwtKeys;
use chirper::auth::users::get_user_by_username;
use chirper::routes::create_router;
use chirper::server::AppState;

/// A running test application: the HTTP server plus direct pool access
/// for seeding data that has no HTTP surface (follows, likes, replies).
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

/// Build the app against a fresh in-memory database.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let state = AppState {
        db_pool: pool.clone(),
        jwt: Arc::new(JwtKeys::new("integration-test-secret", 3600)),
    };

    let server = TestServer::new(create_router(state)).expect("failed to start test server");

    TestApp { server, pool }
}

impl TestApp {
    /// Register a user through the HTTP surface and return their id
    pub async fn register(&self, username: &str, password: &str, name: &str) -> i64 {
        let response = self
            .server
            .post("/register")
            .json(&json!({
                "username": username,
                "password": password,
                "name": name,
                "gender": "other",
            }))
            .await;
        response.assert_status_ok();

        get_user_by_username(&self.pool, username)
            .await
            .unwrap()
            .expect("registered user not found")
            .user_id
    }

    /// Log in through the HTTP surface and return the issued token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .server
            .post("/login")
            .json(&json!({ "username": username, "password": password }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        body["jwtToken"]
            .as_str()
            .expect("no jwtToken in response")
            .to_string()
    }

    /// Register and log in, returning (user_id, token)
    pub async fn register_and_login(&self, username: &str, name: &str) -> (i64, String) {
        let user_id = self.register(username, "password123", name).await;
        let token = self.login(username, "password123").await;
        (user_id, token)
    }
}
