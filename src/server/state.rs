/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container: the database pool and the
 * pre-built JWT keys, both constructed once at startup in `init` and
 * shared by cloning (the pool is internally reference-counted, the keys
 * are behind an `Arc`).
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of
 * the state they need, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::tokens::JwtKeys;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// JWT signing and verification keys
    pub jwt: Arc<JwtKeys>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<JwtKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}
