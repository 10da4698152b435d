/**
 * Authentication Handler Types
 *
 * Request and response bodies for the registration and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Unique handle
    pub username: String,
    /// Plaintext password (hashed before storage, minimum 6 characters)
    pub password: String,
    /// Display name
    pub name: String,
    /// Gender, stored as supplied
    pub gender: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the issued token
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Signed JWT asserting the user id
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}
