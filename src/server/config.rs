/**
 * Server Configuration
 *
 * This module handles loading server configuration from the environment
 * and opening the database connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development. The JWT secret and the store handle
 * are constructed once at process start and passed by explicit reference
 * into every handler; there is no ambient global lookup.
 */

use sqlx::SqlitePool;

/// Seconds in 30 days, the default token lifetime
const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Symmetric JWT signing secret (`JWT_SECRET`)
    pub jwt_secret: String,
    /// Lifetime of issued tokens in seconds (`TOKEN_TTL_SECS`)
    pub token_ttl_secs: u64,
    /// TCP port to listen on (`SERVER_PORT`)
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to development defaults. A missing
    /// `JWT_SECRET` is logged loudly because the fallback value must
    /// never be used in production.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://chirper.db?mode=rwc".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            "dev-secret-change-in-production".to_string()
        });

        let token_ttl_secs = std::env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            port,
        }
    }
}

/// Open the database connection pool and run migrations
///
/// Unlike optional services, the store is required: a connection or
/// migration failure aborts startup.
///
/// # Arguments
/// * `database_url` - SQLite connection URL
///
/// # Returns
/// Connected pool with the schema applied, or the underlying error
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = SqlitePool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// In-memory database pool for unit tests, with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}
