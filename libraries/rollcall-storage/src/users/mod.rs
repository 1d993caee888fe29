//! User queries
//!
//! Update and delete detect missing rows from the affected-row count rather
//! than a pre-read, so a write that leaves a row unchanged still succeeds.

use rollcall_core::{
    error::{Result, RollcallError},
    types::{NewUser, User, UserChanges, UserId},
};
use sqlx::SqlitePool;

const ENTITY: &str = "User";

/// Get all users in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, email, created_at FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Get a user by id
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, created_at FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a user and return the id assigned by the database
///
/// # Errors
///
/// `Validation` if name or email is empty, `ConstraintViolation` if the email
/// is already taken.
pub async fn create(pool: &SqlitePool, user: &NewUser) -> Result<UserId> {
    user.validate()?;

    let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite a user's name and email
///
/// # Errors
///
/// `NotFound` if no row has this id.
pub async fn update(pool: &SqlitePool, id: UserId, changes: &UserChanges) -> Result<()> {
    let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RollcallError::not_found(ENTITY, id));
    }

    Ok(())
}

/// Delete a user
///
/// # Errors
///
/// `NotFound` if no row has this id.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RollcallError::not_found(ENTITY, id));
    }

    Ok(())
}

/// Count stored users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
