use log::{Level, LevelFilter, Metadata, Record};
use simplelog::SharedLogger;
use tokio::sync::mpsc::{error::TrySendError, Sender};

use crate::tg_logs::LogMessage;

/// Which records should not be sent to telegram
#[derive(Debug, Default, Clone)]
pub(crate) struct Config {
    ignore: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct ConfigBuilder(Config);

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }
    /// Skip records, which text contains `pattern`
    pub(crate) fn add_ignore(mut self, pattern: impl Into<String>) -> Self {
        self.0.ignore.push(pattern.into());
        self
    }
    pub(crate) fn build(self) -> Config {
        self.0
    }
}

/// Sends error records to the tg logs job
#[derive(Debug)]
pub(crate) struct TgLogger {
    sender: Sender<LogMessage>,
    config: Config,
}

impl TgLogger {
    pub(crate) fn new(sender: Sender<LogMessage>, config: Config) -> Box<Self> {
        Box::new(Self { sender, config })
    }
    fn is_ignored(&self, text: &str) -> bool {
        self.config.ignore.iter().any(|p| text.contains(p.as_str()))
    }
}

impl log::Log for TgLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = record.args().to_string();
        if self.is_ignored(&text) {
            return;
        }
        let msg = LogMessage::error(text, record.target(), record.file(), record.line());
        // don't block the logging thread, drop message if job is slow
        match self.sender.try_send(msg) {
            Ok(()) | Err(TrySendError::Closed(_)) => (),
            Err(e @ TrySendError::Full(_)) => eprintln!("failed to send log to telegram: {e}"),
        }
    }

    fn flush(&self) {}
}

impl SharedLogger for TgLogger {
    fn level(&self) -> LevelFilter {
        LevelFilter::Error
    }

    fn config(&self) -> Option<&simplelog::Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn log::Log> {
        Box::new(*self)
    }
}
