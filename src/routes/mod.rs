//! Route Configuration
//!
//! Assembly of the HTTP route table and middleware layering.

pub mod router;

pub use router::create_router;
