//! Middleware Module
//!
//! HTTP middleware for the server. Currently only the authentication
//! gate lives here.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
