use chrono::Utc;
use teloxide::{types::User, utils::html};

use common::types::UserId;
use db::{models::UserRecord, UserStore};

use crate::texts;

/// User, who sent /start, as reported by telegram
#[derive(Debug, Clone)]
pub(crate) struct UserDescriptor {
    pub id: UserId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub is_bot: bool,
}

impl From<&User> for UserDescriptor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            is_bot: user.is_bot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Registration {
    New,
    Existing,
}

/// Save user, if it's seen for the first time. Existing users are never
/// updated
pub(crate) async fn register_user(
    store: &dyn UserStore,
    user: &UserDescriptor,
) -> db::Result<Registration> {
    if let Some(existing) = store.find_user(user.id).await? {
        log::debug!("user {} is already registered", existing.display());
        return Ok(Registration::Existing);
    }

    let record = UserRecord::builder()
        .user_id(user.id.into())
        .first_name(user.first_name.clone())
        .maybe_last_name(user.last_name.clone())
        .maybe_username(user.username.clone())
        .date_joined(Utc::now())
        .is_bot(user.is_bot)
        .build();

    if store.insert_user(&record).await? {
        log::info!("new user registered: {}", user.id);
        Ok(Registration::New)
    } else {
        // another /start from this user was faster
        log::debug!("user {} was registered concurrently", user.id);
        Ok(Registration::Existing)
    }
}

/// Text to answer on /start. Errors are logged and replaced with generic
/// message, so user always gets an answer
pub(crate) async fn start_reply(store: &dyn UserStore, user: Option<UserDescriptor>) -> String {
    let Some(user) = user else {
        log::error!("got /start without sender");
        return texts::START_ERROR.to_string();
    };

    let first_name = html::escape(&user.first_name);
    match register_user(store, &user).await {
        Ok(Registration::New) => texts::welcome_new(&first_name),
        Ok(Registration::Existing) => texts::welcome_back(&first_name),
        Err(e) => {
            log::error!("error processing /start command for user {}: {e}", user.id);
            texts::START_ERROR.to_string()
        }
    }
}
