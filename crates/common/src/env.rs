use teloxide::types::ChatId;

const BOT_TOKEN: &str = "BOT_TOKEN";
const DATABASE_URL: &str = "DATABASE_URL";
const LOG_CHAT_ID: &str = "LOG_CHAT_ID";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} env variable is not set or empty")]
    Missing(&'static str),
    #[error("invalid {name} env variable: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Credentials of the telegram bot
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
}

/// Where users are stored
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,
    pub store: StoreConfig,
    /// Chat which receives error logs
    pub log_chat_id: Option<ChatId>,
}

impl Config {
    /// Read config from process environment. Values from `.env` are loaded
    /// first, if file exists
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("failed to load .env: {e}");
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let log_chat_id = match get(LOG_CHAT_ID) {
            Some(value) => match value.trim().parse() {
                Ok(id) => Some(ChatId(id)),
                Err(_) => {
                    return Err(ConfigError::Invalid {
                        name: LOG_CHAT_ID,
                        value,
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            bot: BotConfig {
                token: required(BOT_TOKEN)?,
            },
            store: StoreConfig {
                url: required(DATABASE_URL)?,
            },
            log_chat_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_config_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            (BOT_TOKEN, "123:abc"),
            (DATABASE_URL, "sqlite://telegram_bot.db"),
            (LOG_CHAT_ID, "-100500"),
        ]))
        .unwrap();

        assert_eq!(config.bot.token, "123:abc");
        assert_eq!(config.store.url, "sqlite://telegram_bot.db");
        assert_eq!(config.log_chat_id, Some(ChatId(-100500)));
    }

    #[test]
    fn test_config_errors() {
        let table: &[(&[(&str, &str)], ConfigError)] = &[
            (&[], ConfigError::Missing(BOT_TOKEN)),
            (&[(DATABASE_URL, "sqlite://db")], ConfigError::Missing(BOT_TOKEN)),
            (&[(BOT_TOKEN, "t")], ConfigError::Missing(DATABASE_URL)),
            (
                &[(BOT_TOKEN, "t"), (DATABASE_URL, "  ")],
                ConfigError::Missing(DATABASE_URL),
            ),
            (
                &[(BOT_TOKEN, "t"), (DATABASE_URL, "sqlite://db"), (LOG_CHAT_ID, "chat")],
                ConfigError::Invalid {
                    name: LOG_CHAT_ID,
                    value: "chat".to_string(),
                },
            ),
        ];
        for (i, (vars, expected)) in table.iter().enumerate() {
            let res = Config::from_lookup(lookup(vars));
            assert_eq!(res.err().as_ref(), Some(expected), "test table[{i}]");
        }
    }

    #[test]
    fn test_log_chat_id_is_optional() {
        let config =
            Config::from_lookup(lookup(&[(BOT_TOKEN, "t"), (DATABASE_URL, "sqlite://db")])).unwrap();
        assert_eq!(config.log_chat_id, None);
    }
}
