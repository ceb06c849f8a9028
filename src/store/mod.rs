use std::time::Duration;

use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, prelude::*,
};
use sea_orm_migration::MigratorTrait;
use thiserror::Error;

mod entities;
mod migration;

pub use entities::prelude::*;
use entities::*;
use migration::Migrator;

pub type UserModel = user::Model;

/// Statements that take longer than this are logged at warn level.
const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("User not found")]
    NotFound,
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

pub struct Db {
    // slightly misleading name but this is a connection pool, not a single connection
    conn: DatabaseConnection,
}

impl Db {
    /// Opens a connection pool. Every executed statement is logged at info
    /// level; a missing row is not an error at this layer and stays silent.
    pub async fn connect(url: &str, pool_size: u32) -> DatabaseResult<Self> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Info)
            .sqlx_slow_statements_logging_settings(log::LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD);

        let db = Database::connect(opt).await?;

        Ok(Self { conn: db })
    }

    /// Creates or updates the `user` and `product` tables. Safe to run on
    /// every startup, already-applied migrations are skipped.
    pub async fn sync_schema(&self) -> DatabaseResult<()> {
        Migrator::up(&self.conn, None).await?;
        Ok(())
    }

    /// Inserts a new user; the returned model carries the id assigned by the
    /// database.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        age: i32,
    ) -> DatabaseResult<UserModel> {
        let model = user::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            age: Set(age),
        };

        Ok(model.insert(&self.conn).await?)
    }

    pub async fn user_by_id(&self, id: i32) -> DatabaseResult<UserModel> {
        User::find_by_id(id).one(&self.conn).await?.ok_or(DatabaseError::NotFound)
    }

    /// All users with the given name, ordered by id.
    pub async fn users_by_name(&self, name: &str) -> DatabaseResult<Vec<UserModel>> {
        Ok(User::find()
            .filter(user::Column::Name.eq(name))
            .order_by_asc(user::Column::Id)
            .all(&self.conn)
            .await?)
    }

    /// Updates only the age column of the row matching the model's id.
    pub async fn set_user_age(&self, user: UserModel, age: i32) -> DatabaseResult<UserModel> {
        let mut model = user.into_active_model();
        model.age = Set(age);

        Ok(model.update(&self.conn).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_db() -> Db {
        // in-memory sqlite, single connection so the database survives
        let db = Db::connect("sqlite::memory:", 1).await.expect("connect");
        db.sync_schema().await.expect("schema sync");
        db
    }

    #[tokio::test]
    async fn schema_sync_is_idempotent() {
        let db = open_db().await;
        db.sync_schema().await.expect("second sync should be a no-op");
    }

    #[tokio::test]
    async fn create_assigns_nonzero_id() {
        let db = open_db().await;
        let user = db.create_user("张三", "zhangsan@example.com", 30).await.expect("create");

        assert_ne!(user.id, 0);
        assert_eq!(user.name, "张三");
        assert_eq!(user.email, "zhangsan@example.com");
        assert_eq!(user.age, 30);
    }

    #[tokio::test]
    async fn read_back_matches_created() {
        let db = open_db().await;
        let created = db.create_user("张三", "zhangsan@example.com", 30).await.unwrap();

        let fetched = db.user_by_id(created.id).await.expect("read back");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn filter_by_name_returns_matches_in_order() {
        let db = open_db().await;
        let first = db.create_user("张三", "zhangsan@example.com", 30).await.unwrap();
        db.create_user("李四", "lisi@example.com", 25).await.unwrap();
        let second = db.create_user("张三", "zhangsan2@example.com", 40).await.unwrap();

        let users = db.users_by_name("张三").await.expect("filtered list");
        assert_eq!(users, vec![first, second]);
    }

    #[tokio::test]
    async fn update_changes_only_age() {
        let db = open_db().await;
        let created = db.create_user("张三", "zhangsan@example.com", 30).await.unwrap();

        db.set_user_age(created.clone(), 31).await.expect("update");

        let fetched = db.user_by_id(created.id).await.unwrap();
        assert_eq!(fetched.age, 31);
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.email, created.email);
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let db = open_db().await;

        let err = db.user_by_id(12345).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound));
    }
}
