//! Authentication and User Management
//!
//! This module covers the identity side of the system:
//!
//! - **`tokens`** - Stateless JWT issue/verify (the token service)
//! - **`users`** - Identity records and their store operations
//! - **`handlers`** - Registration and login endpoints

pub mod handlers;
pub mod tokens;
pub mod users;

pub use handlers::{login, register};
pub use tokens::{issue_token, verify_token, JwtKeys};
