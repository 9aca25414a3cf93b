use common::LogError;
use teloxide::{prelude::*, types::BotCommand, utils::html, ApiError, RequestError};

use crate::{
    api::{BotApi, Reply},
    callback::HelpCallback,
    keyboards::Keyboards,
    texts, Api,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HelpSection {
    General,
    /// Built from commands, registered for the bot
    Commands,
    Faq,
}

impl HelpSection {
    /// Order of sections in help menu
    pub(crate) const ALL: [Self; 3] = [Self::General, Self::Commands, Self::Faq];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Commands => "commands",
            Self::Faq => "faq",
        }
    }
    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Commands => "Commands",
            Self::Faq => "FAQ",
        }
    }
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SectionContent {
    Static(&'static str),
    /// Should be rendered from current bot commands
    Commands,
}

pub(crate) fn resolve_section(name: &str) -> SectionContent {
    match HelpSection::from_name(name) {
        Some(HelpSection::General) => SectionContent::Static(texts::HELP_GENERAL),
        Some(HelpSection::Faq) => SectionContent::Static(texts::HELP_FAQ),
        Some(HelpSection::Commands) => SectionContent::Commands,
        None => SectionContent::Static(texts::SECTION_NOT_FOUND),
    }
}

/// One line per command: `/<name> - <description>`. Result is html-escaped
pub(crate) fn render_commands(commands: &[BotCommand]) -> String {
    if commands.is_empty() {
        return texts::NO_COMMANDS.to_string();
    }
    commands
        .iter()
        .map(|c| {
            format!(
                "/{} - {}",
                html::escape(c.command.trim_start_matches('/')),
                html::escape(&c.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) async fn send_help_menu(api: &dyn BotApi, msg: &Message) -> ResponseResult<()> {
    let reply = Reply::new(texts::HELP_MENU).markup(Keyboards::help_menu());
    api.send(msg.chat.id, reply).await
}

pub(crate) async fn help_callback_handler(api: Api, q: CallbackQuery) -> ResponseResult<()> {
    let answer_err = || api.answer_callback(&q.id, Some(texts::CALLBACK_FAILED));

    let Some(data) = q.data.as_deref() else {
        log::error!("got empty callback {} from user {}", q.id, q.from.id);
        answer_err().await?;
        return Ok(());
    };
    log::debug!("got callback: {data:?}");

    let section = match HelpCallback::from(data) {
        HelpCallback::Section(section) => section,
        HelpCallback::Malformed => {
            log::error!("invalid callback: {data:?}");
            answer_err().await?;
            return Ok(());
        }
    };

    let Some(msg) = q.regular_message() else {
        log::error!("message of callback {} is inaccessible", q.id);
        answer_err().await?;
        return Ok(());
    };

    let text = match resolve_section(&section) {
        SectionContent::Static(text) => text.to_string(),
        SectionContent::Commands => match api.my_commands().await {
            Ok(commands) => render_commands(&commands),
            Err(e) => {
                log::error!("failed to get bot commands: {e}");
                answer_err().await?;
                return Ok(());
            }
        },
    };

    let markup = msg.reply_markup().cloned();
    match api.edit_html(msg.chat.id, msg.id, text, markup).await {
        Ok(()) => (),
        // same section was selected twice
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            log::debug!("help section {section:?} is already shown");
        }
        Err(e) => {
            answer_err().await.log_error_msg("failed to answer callback");
            return Err(e);
        }
    }

    api.answer_callback(&q.id, None).await
}
