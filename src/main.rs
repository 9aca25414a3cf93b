use std::{sync::Arc, time::Duration};

use anyhow::Result;
use reqwest::Client;
use simplelog::LevelFilter;
use teloxide::{prelude::*, utils::command::BotCommands};
use tokio::{
    signal,
    sync::mpsc::{self, Sender},
    task::JoinSet,
};
use tokio_util::sync::CancellationToken;

use bot_handlers::{Api, Command, Store};
use common::spawn_with_token;
use db::DB;

use crate::logger::TgLogger;
use crate::tg_logs::{start_tg_logs_job, LogMessage};

mod logger;
mod tg_logs;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TG_LOGS_CHANNEL_SIZE: usize = 100;

const IS_PROD: bool = cfg!(feature = "prod");
const LOG_LEVEL: LevelFilter = if IS_PROD {
    LevelFilter::Error
} else {
    LevelFilter::Debug
};

#[tokio::main]
async fn main() -> Result<()> {
    let tg_logs_chan = mpsc::channel(TG_LOGS_CHANNEL_SIZE);
    init_logger(tg_logs_chan.0)?;

    let config = common::Config::from_env()?;

    let db = DB::init(&config.store.url).await?;
    log::info!("{} users registered", db.count_users().await?);
    let store: Store = Arc::new(db);

    let bot = Bot::with_client(
        config.bot.token,
        Client::builder().timeout(REQUEST_TIMEOUT).build()?,
    );
    bot.set_my_commands(Command::bot_commands()).await?;

    let cancel_token = CancellationToken::new();

    let mut jobs = JoinSet::new();
    if let Some(log_chat_id) = config.log_chat_id {
        jobs.spawn(spawn_with_token(
            cancel_token.clone(),
            start_tg_logs_job(bot.clone(), log_chat_id, tg_logs_chan.1),
        ));
    } else {
        drop(tg_logs_chan.1);
        log::warn!("LOG_CHAT_ID env not set, skip starting tg logs job")
    }
    jobs.spawn(spawn_with_token(
        cancel_token.clone(),
        start_bot(bot.clone(), store),
    ));

    jobs.spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("failed to listen for SIGINT: {e}");
        }
        cancel_token.cancel();
    });

    while (jobs.join_next().await).is_some() {}

    Ok(())
}

fn init_logger(sender: Sender<LogMessage>) -> Result<()> {
    use simplelog::*;

    use logger::{Config as TgConfig, ConfigBuilder as TgConfigBuilder};

    let term_config = if IS_PROD {
        Config::default()
    } else {
        ConfigBuilder::new()
            .add_filter_ignore_str("h2")
            .add_filter_ignore_str("hyper")
            .add_filter_ignore_str("reqwest")
            .add_filter_ignore_str("rustls")
            .add_filter_ignore_str("sqlx")
            .build()
    };

    let tg_config = if IS_PROD {
        TgConfig::default()
    } else {
        TgConfigBuilder::new()
            .add_ignore("ConnectionReset")
            .add_ignore("TerminatedByOtherGetUpdates")
            .build()
    };

    CombinedLogger::init(vec![
        TermLogger::new(
            LOG_LEVEL,
            term_config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        TgLogger::new(sender, tg_config),
    ])?;

    Ok(())
}

async fn start_bot(bot: Bot, store: Store) {
    log::debug!("starting bot");
    let api: Api = Arc::new(bot.clone());
    Dispatcher::builder(bot, bot_handlers::schema())
        .dependencies(dptree::deps![store, api])
        .default_handler(|_update| async move { log::debug!("unhandled update") })
        .error_handler(LoggingErrorHandler::with_custom_text("error in dispatcher"))
        .build()
        .dispatch()
        .await;
}
