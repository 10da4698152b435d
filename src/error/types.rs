/**
 * API Error Types
 *
 * This module defines the error taxonomy used by all HTTP handlers.
 * Each variant maps to an HTTP status code and a short plain-text body.
 *
 * # Error Categories
 *
 * - `InvalidInput` - Malformed or too-short input (400)
 * - `Conflict` - Duplicate username at registration (400)
 * - `Unauthorized` - Bad credential at login (400)
 * - `Unauthenticated` - Missing or invalid bearer token (401)
 * - `Forbidden` - Ownership or visibility denied (401)
 * - `Internal` - Store or hashing failure (500)
 *
 * # Status Code Parity
 *
 * Two mappings look unusual on purpose and must not be "fixed":
 *
 * - Login failures (`Unauthorized`) surface as 400, not 401. The 401
 *   status is reserved for token-level failures.
 * - `Forbidden` surfaces as 401 with the same body whether the target
 *   tweet is invisible to the caller or does not exist at all. Collapsing
 *   the two cases is a deliberate information-hiding policy: an
 *   authorization failure never reveals whether the resource exists.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
///
/// Store and hashing failures are logged where they occur and converted
/// into the opaque `Internal` variant so no backend detail leaks to the
/// caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or too-short input (e.g. password under 6 characters)
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Duplicate username at registration
    #[error("User already exists")]
    Conflict,

    /// Bad credential at login (unknown user or wrong password)
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Missing, malformed, or cryptographically invalid bearer token
    #[error("Invalid JWT Token")]
    Unauthenticated,

    /// Ownership or visibility denied.
    ///
    /// Intentionally indistinguishable from "tweet does not exist" for
    /// tweet-scoped reads and deletes.
    #[error("Invalid Request")]
    Forbidden,

    /// Store or hashing failure; detail is logged, never surfaced
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput`, `Conflict`, `Unauthorized` - 400 Bad Request
    /// - `Unauthenticated`, `Forbidden` - 401 Unauthorized
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Conflict | Self::Unauthorized(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated | Self::Forbidden => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        Self::Internal
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        Self::Internal
    }
}
