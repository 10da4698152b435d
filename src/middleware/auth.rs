/**
 * Authentication Middleware
 *
 * This module provides the auth gate applied to every protected route.
 * It extracts the bearer token from the Authorization header, verifies
 * it, and attaches the caller's user id to the request for handlers.
 *
 * The gate is stateless: verification is a signature and expiry check
 * against the configured key, never a store lookup.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated caller identity extracted from the bearer token
#[derive(Clone, Copy, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header (the conventional
///    `Bearer <token>` form or the bare token value)
/// 2. Verifies its signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions for handlers
///
/// Missing or invalid tokens are rejected with 401 `Invalid JWT Token`
/// before any query runs.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated
        })?;

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    let user_id = verify_token(&app_state.jwt, token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::Unauthenticated
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Used as a handler parameter on protected routes; yields the identity
/// the auth middleware attached to the request.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
