/**
 * Server Initialization
 *
 * This module assembles the Axum application: it opens the store, builds
 * the JWT keys from configuration, and wires both into the router.
 *
 * # Initialization Steps
 *
 * 1. Connect the database pool and run migrations
 * 2. Build `JwtKeys` from the configured secret
 * 3. Create `AppState` and the router
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::tokens::JwtKeys;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
/// * `config` - Server configuration (database URL, JWT secret, lifetimes)
///
/// # Returns
/// Configured Axum Router ready to serve requests, or the store error
/// that prevented startup
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing chirper backend server");

    let db_pool = connect_database(&config.database_url).await?;
    let jwt = Arc::new(JwtKeys::new(&config.jwt_secret, config.token_ttl_secs));

    let app_state = AppState { db_pool, jwt };

    Ok(create_router(app_state))
}
