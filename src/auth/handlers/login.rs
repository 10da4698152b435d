/**
 * Login Handler
 *
 * This module implements user authentication for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password with bcrypt
 * 3. Issue a JWT asserting the user id
 *
 * Both failure modes surface as 400 with a short text body ("Invalid
 * user" / "Invalid password"); the 401 status is reserved for token
 * failures on protected routes.
 */

use axum::{extract::State, Json};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::tokens::issue_token;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Invalid user` - Unknown username
/// * `400 Invalid password` - Bcrypt mismatch
/// * `500 Internal Server Error` - Store, hashing, or signing failure
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&app_state.db_pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Unknown user: {}", request.username);
            ApiError::Unauthorized("Invalid user")
        })?;

    let valid = verify(&request.password, &user.password)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::Unauthorized("Invalid password"));
    }

    let jwt_token = issue_token(&app_state.jwt, user.user_id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::Internal
    })?;

    tracing::info!("User logged in: {} (id {})", user.username, user.user_id);

    Ok(Json(LoginResponse { jwt_token }))
}
