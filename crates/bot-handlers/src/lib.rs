use std::sync::Arc;

mod api;
mod bot_messages;
mod callback;
mod commands;
mod help;
mod keyboards;
mod schema;
mod start;
mod texts;

// callback payload: {flag}_{section}
const HELP_FLAG: &str = "help";
const FLAG_SEP: char = '_';

pub use api::{BotApi, Reply};
pub use commands::Command;
pub use schema::schema;

/// Users store, shared between handlers
pub type Store = Arc<dyn db::UserStore>;

/// Telegram client, shared between handlers
pub type Api = Arc<dyn BotApi>;
