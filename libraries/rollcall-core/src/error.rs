/// Core error types for Rollcall
use thiserror::Error;

/// Result type alias using `RollcallError`
pub type Result<T> = std::result::Result<T, RollcallError>;

/// Core error type for Rollcall
#[derive(Error, Debug)]
pub enum RollcallError {
    /// A required field is missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. `User`
        entity: String,
        /// Identifier that matched no row
        id: String,
    },

    /// A uniqueness or other schema constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl RollcallError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Whether this error means the addressed row does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for RollcallError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &err {
            sqlx::Error::Database(db_err)
                if matches!(
                    db_err.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) =>
            {
                Self::ConstraintViolation(db_err.message().to_string())
            }
            sqlx::Error::RowNotFound => Self::Storage("Row not found".to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}
