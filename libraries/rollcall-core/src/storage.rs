//! Storage trait for the user resource

use crate::error::Result;
use crate::types::{NewUser, User, UserChanges, UserId};
use async_trait::async_trait;

/// Store owning persistent user records
///
/// Implementations serialize access internally; callers share one handle
/// (usually behind an `Arc<dyn UserStore>`) without extra locking.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users in insertion order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Create a user and return its assigned id
    ///
    /// Fails with `Validation` when name or email is empty and with
    /// `ConstraintViolation` when the email is already taken.
    async fn create_user(&self, user: NewUser) -> Result<UserId>;

    /// Get a user by id, failing with `NotFound` when no row matches
    async fn get_user(&self, id: UserId) -> Result<User>;

    /// Overwrite name and email, failing with `NotFound` when no row was affected
    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<()>;

    /// Delete a user, failing with `NotFound` when no row was affected
    async fn delete_user(&self, id: UserId) -> Result<()>;
}
