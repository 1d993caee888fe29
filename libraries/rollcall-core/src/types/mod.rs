//! Domain types
mod user;

pub use user::{NewUser, User, UserChanges, UserId, MISSING_FIELDS_MESSAGE};
