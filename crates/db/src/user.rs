use common::types::{Id, UserId};

use crate::{models, IgnoreNotFound, UserStore};

use super::{Result, DB, USER_TABLE};

#[async_trait::async_trait]
impl UserStore for DB {
    async fn find_user(&self, user_id: UserId) -> Result<Option<models::UserRecord>> {
        log::debug!("select user {user_id}");
        let id: Id = user_id.into();
        let res = sqlx::query_as::<_, models::UserRecord>(&format!(
            "select * from {USER_TABLE}
             where user_id = ?"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await;

        Ok(res.ignore_not_found()?)
    }
    async fn insert_user(&self, user: &models::UserRecord) -> Result<bool> {
        log::debug!("saving user {}", user.user_id());
        let res = sqlx::query(&format!(
            "insert into {USER_TABLE}
             (user_id, first_name, last_name, username, date_joined, is_bot)
             values (?, ?, ?, ?, ?, ?)
             on conflict(user_id) do nothing"
        ))
        .bind(user.user_id())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.username())
        .bind(user.date_joined())
        .bind(user.is_bot())
        .execute(&self.pool)
        .await?;

        let inserted = res.rows_affected() > 0;
        if !inserted {
            log::debug!("user {} already exists, ignoring", user.user_id());
        }
        Ok(inserted)
    }
}
