//! chirper - a small twitter-style backend
//!
//! This library implements a social-networking backend: account creation
//! and login, tweet posting and deletion, and authenticated social-graph
//! queries (feed, followers, following, tweet detail, likes, replies).
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app construction
//! - **`routes`** - HTTP route table
//! - **`auth`** - Registration, login, stateless JWT token service
//! - **`middleware`** - The authentication gate on protected routes
//! - **`tweets`** - The social-graph query engine and tweet mutations
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Control Flow
//!
//! inbound request → auth gate (verify token, extract identity) →
//! query/mutation handler (scope + execute against the store) → response
//!
//! # Authorization Model
//!
//! Another user's tweet (and its likes and replies) is readable only if
//! the caller follows its author. The rejection for an invisible tweet is
//! byte-identical to the one for a nonexistent tweet; the service never
//! reveals whether a tweet the caller may not read exists.

/// Registration, login, and the token service
pub mod auth;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Authentication middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Tweets and social-graph queries
pub mod tweets;

pub use error::ApiError;
pub use server::{create_app, AppState, ServerConfig};
