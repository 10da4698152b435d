/**
 * Registration Handler
 *
 * This module implements user registration for POST /register.
 *
 * # Registration Process
 *
 * 1. Reject if the username is already taken
 * 2. Reject if the password is shorter than 6 characters
 * 3. Hash the password with bcrypt and insert the new user
 *
 * The duplicate-handle check runs before the password check, so a taken
 * handle with a short password reports the conflict. No token is issued;
 * login is a separate step.
 */

use axum::{extract::State, Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::users::{create_user, get_user_by_username};
use crate::error::ApiError;

/// Registration handler
///
/// # Errors
///
/// * `400 User already exists` - The handle is taken
/// * `400 Password is too short` - Fewer than 6 characters
/// * `500 Internal Server Error` - Store or hashing failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<&'static str, ApiError> {
    tracing::info!("Registration request for: {}", request.username);

    if get_user_by_username(&pool, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Username already taken: {}", request.username);
        return Err(ApiError::Conflict);
    }

    if request.password.chars().count() < 6 {
        return Err(ApiError::InvalidInput("Password is too short"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &pool,
        &request.name,
        &request.username,
        &password_hash,
        &request.gender,
    )
    .await?;

    tracing::info!("User created: {} (id {})", user.username, user.user_id);

    Ok("User created successfully")
}
