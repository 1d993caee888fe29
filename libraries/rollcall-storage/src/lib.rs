//! Rollcall Storage
//!
//! `SQLite` persistence for the Rollcall user resource.
//!
//! # Architecture
//!
//! - **Single Handle**: One pooled connection shared process-wide; `SQLite`
//!   serializes every statement issued through it
//! - **Vertical Slicing**: The `users` module owns its queries
//! - **Bootstrap**: The schema is created idempotently by embedded migrations
//!
//! # Example
//!
//! ```rust,no_run
//! use rollcall_core::{NewUser, UserStore};
//! use rollcall_storage::SqliteUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteUserStore::connect("sqlite://rollcall.db").await?;
//!
//! let id = store
//!     .create_user(NewUser::new("Alice Johnson", "alice@example.com"))
//!     .await?;
//! let user = store.get_user(id).await?;
//! assert_eq!(user.email, "alice@example.com");
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::SqliteUserStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Creates the `users` table if it does not exist yet. Safe to call on every
/// startup.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// The pool holds a single connection that is never recycled, so every
/// statement is serialized and `sqlite::memory:` databases live as long as
/// the pool does.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://rollcall.db>`)
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
