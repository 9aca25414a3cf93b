use std::fmt::Display;

use teloxide::{
    payloads::SendMessageSetters,
    requests::Requester,
    types::{ChatId, ParseMode},
    utils::markdown::code_block_with_lang,
    Bot,
};
use tokio::sync::mpsc::Receiver;

use common::LogError;

/// Forward log messages to telegram chat until all senders are dropped
pub(crate) async fn start_tg_logs_job(bot: Bot, chat_id: ChatId, mut rx: Receiver<LogMessage>) {
    log::debug!("starting tg logs job for chat {chat_id}");
    while let Some(msg) = rx.recv().await {
        bot.send_message(chat_id, msg.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .log_error_msg("failed to send log");
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LogMessage {
    Code(String),
}

impl LogMessage {
    pub(crate) fn error(
        s: impl Into<String>,
        target: &str,
        file: Option<&str>,
        line: Option<u32>,
    ) -> Self {
        let mut msg = format!("[ERROR] {}\n        at {target}", s.into());
        if let Some(file) = file {
            msg += &format!(": {file}");
            if let Some(line) = line {
                msg += &format!(":{line}");
            }
        }
        Self::Code(msg)
    }
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogMessage::Code(s) => code_block_with_lang(s, "log").fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let table = [
            (None, None, "[ERROR] boom\n        at bot"),
            (Some("src/main.rs"), None, "[ERROR] boom\n        at bot: src/main.rs"),
            (
                Some("src/main.rs"),
                Some(10),
                "[ERROR] boom\n        at bot: src/main.rs:10",
            ),
        ];
        for (i, (file, line, expected)) in table.into_iter().enumerate() {
            assert_eq!(
                LogMessage::error("boom", "bot", file, line),
                LogMessage::Code(expected.to_string()),
                "test table[{i}]"
            );
        }
    }
}
