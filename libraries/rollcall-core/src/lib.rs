//! Rollcall Core
//!
//! Domain types, the store trait, and error handling shared by the Rollcall
//! storage layer and HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserChanges`
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `RollcallError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use rollcall_core::types::NewUser;
//!
//! let new_user = NewUser::new("Alice Johnson", "alice@example.com");
//! assert!(new_user.validate().is_ok());
//!
//! let incomplete = NewUser::new("Incomplete User", "");
//! assert!(incomplete.validate().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RollcallError};
pub use storage::UserStore;
pub use types::{NewUser, User, UserChanges, UserId};
