use std::time::Duration;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use common::types::UserId;

#[cfg(any(test, feature = "memory"))]
mod memory;
pub mod models;
mod user;


#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryStore;

const USER_TABLE: &str = "users";

/// How long to wait for a free connection before giving up
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to run query: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Operations on users collection, which handlers need
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, user_id: UserId) -> Result<Option<models::UserRecord>>;
    /// Insert user if there is no user with the same id. Returns `false`, if
    /// user already exists, existing record is not touched
    async fn insert_user(&self, user: &models::UserRecord) -> Result<bool>;
}

#[derive(Debug, Clone)]
pub struct DB {
    pool: SqlitePool,
}

impl DB {
    /// Connect to database by url, e.g. `sqlite://telegram_bot.db`, and
    /// apply migrations
    pub async fn init(url: &str) -> Result<Self> {
        let options: SqliteConnectOptions = url.parse()?;
        let pool = SqlitePoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options.create_if_missing(true))
            .await?;

        sqlx::migrate!("../../migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}

// Stats
impl DB {
    pub async fn count_users(&self) -> Result<u32> {
        Ok(sqlx::query_as::<_, models::fetch::Count>(&format!(
            "select count(*) as count from {USER_TABLE}"
        ))
        .fetch_one(&self.pool)
        .await?
        .count)
    }
}

trait IgnoreNotFound<T> {
    type Error;

    fn ignore_not_found(self) -> Result<Option<T>, Self::Error>;
}

impl<T> IgnoreNotFound<T> for std::result::Result<T, sqlx::Error> {
    type Error = sqlx::Error;

    fn ignore_not_found(self) -> std::result::Result<Option<T>, Self::Error> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
