/// User domain type
use crate::error::{Result, RollcallError};
use serde::{Deserialize, Serialize};

/// User identifier (SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`)
pub type UserId = i64;

/// Message returned when a create request lacks a name or an email
pub const MISSING_FIELDS_MESSAGE: &str = "Name and email are required";

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Unique user identifier, never reused after deletion
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Creation timestamp as stored by the database (`YYYY-MM-DD HH:MM:SS`)
    pub created_at: String,
}

/// Data required to create a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name, must be non-empty
    pub name: String,
    /// Email address, must be non-empty
    pub email: String,
}

impl NewUser {
    /// Create a new user payload
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build from optional request fields, rejecting absent or empty values
    pub fn from_parts(name: Option<String>, email: Option<String>) -> Result<Self> {
        match (name, email) {
            (Some(name), Some(email)) => {
                let new_user = Self { name, email };
                new_user.validate()?;
                Ok(new_user)
            }
            _ => Err(RollcallError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }

    /// Check that both name and email are non-empty
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(RollcallError::validation(MISSING_FIELDS_MESSAGE));
        }
        Ok(())
    }
}

/// Replacement values for an existing user
///
/// Fields are written as given. An absent field is written as `NULL`, which
/// the `NOT NULL` columns reject with a constraint violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
}

impl UserChanges {
    /// Replace both name and email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
