//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - ServerConfig and database setup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - App construction
//! ```

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Application state management
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
