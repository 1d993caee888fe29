//! Rollcall Server Library
//!
//! HTTP/JSON CRUD service for the user resource.
//!
//! This library exposes the router, handlers and configuration for testing
//! purposes; the binary in `main.rs` only wires them to a listener.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{RunMode, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
