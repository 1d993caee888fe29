use crate::{create_pool, error::StorageError, run_migrations, users};
use async_trait::async_trait;
use rollcall_core::{
    error::{Result, RollcallError},
    storage::UserStore,
    types::{NewUser, User, UserChanges, UserId},
};
use sqlx::SqlitePool;

/// User store backed by `SQLite`
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url` and bootstrap the schema
    pub async fn connect(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn create_user(&self, user: NewUser) -> Result<UserId> {
        users::create(&self.pool, &user).await
    }

    async fn get_user(&self, id: UserId) -> Result<User> {
        users::get_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| RollcallError::not_found("User", id))
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<()> {
        users::update(&self.pool, id, &changes).await
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        users::delete(&self.pool, id).await
    }
}
