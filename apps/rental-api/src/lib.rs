//! # Rental API
//!
//! HTTP transport over the rental reports aggregation engine.
//!
//! The binary in `main.rs` wires configuration, tracing, the database pool,
//! and the route table together; everything it uses is exported here so the
//! endpoint tests can drive the exact same application setup.

pub mod config;
pub mod error;
pub mod handlers;

pub use config::ApiConfig;
pub use error::{ApiError, ErrorCode};
