use chrono::{DateTime, Utc};

use common::types::Id;

/// User, who pressed /start at least once
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, bon::Builder)]
pub struct UserRecord {
    /// Telegram user ID
    user_id: Id,

    first_name: String,

    last_name: Option<String>,

    username: Option<String>,

    /// When user was registered. Never changes after insert
    #[builder(default = Utc::now())]
    date_joined: DateTime<Utc>,

    /// Is user a bot, as reported by telegram at registration time
    #[builder(default)]
    is_bot: bool,
}

impl UserRecord {
    pub fn user_id(&self) -> Id {
        self.user_id
    }
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }
    /// Display user for logs
    pub fn display(&self) -> String {
        match &self.username {
            Some(username) => format!("@{username} ({})", self.user_id),
            None => format!("{} ({})", self.first_name, self.user_id),
        }
    }
}

/// Struct helpers for extracting partial structs
pub mod fetch {
    #[derive(sqlx::FromRow)]
    pub(crate) struct Count {
        pub count: u32,
    }
}
