/**
 * User Model and Database Operations
 *
 * This module defines the identity record and its store operations.
 * Identities are created at registration and immutable thereafter;
 * there is no update or delete surface.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing an identity in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Surrogate identity id
    pub user_id: i64,
    /// Display name
    pub name: String,
    /// Unique handle used for login
    pub username: String,
    /// Hashed password (bcrypt)
    pub password: String,
    /// Gender as supplied at registration
    pub gender: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `username` - Unique handle
/// * `password_hash` - Bcrypt hash of the user's password
/// * `gender` - Gender as supplied at registration
///
/// # Returns
/// Created user or error (including the unique-constraint violation if
/// the handle is already taken)
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    username: &str,
    password_hash: &str,
    gender: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, username, password, gender)
        VALUES (?, ?, ?, ?)
        RETURNING user_id, name, username, password, gender
        "#,
    )
    .bind(name)
    .bind(username)
    .bind(password_hash)
    .bind(gender)
    .fetch_one(pool)
    .await
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, username, password, gender
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by id
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, username, password, gender
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
