use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{BotCommand, ChatId, InlineKeyboardMarkup, MessageId, ParseMode, ReplyParameters},
};

/// Telegram methods, called by handlers
#[async_trait]
pub trait BotApi: Send + Sync {
    async fn send(&self, chat_id: ChatId, reply: Reply) -> ResponseResult<()>;
    /// Replace text of the message, html is allowed
    async fn edit_html(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: String,
        markup: Option<InlineKeyboardMarkup>,
    ) -> ResponseResult<()>;
    /// Stop loading animation on the button. With `alert`, show it to user
    async fn answer_callback(&self, id: &str, alert: Option<&str>) -> ResponseResult<()>;
    async fn my_commands(&self) -> ResponseResult<Vec<BotCommand>>;
}

/// Outgoing text message
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub html: bool,
    pub reply_to: Option<MessageId>,
    pub markup: Option<InlineKeyboardMarkup>,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
            reply_to: None,
            markup: None,
        }
    }
    pub fn html(mut self) -> Self {
        self.html = true;
        self
    }
    pub fn reply_to(mut self, id: MessageId) -> Self {
        self.reply_to = Some(id);
        self
    }
    pub fn markup(mut self, markup: impl Into<InlineKeyboardMarkup>) -> Self {
        self.markup = Some(markup.into());
        self
    }
}

#[async_trait]
impl BotApi for Bot {
    async fn send(&self, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
        let mut req = self.send_message(chat_id, reply.text);
        if reply.html {
            req = req.parse_mode(ParseMode::Html);
        }
        if let Some(id) = reply.reply_to {
            req = req.reply_parameters(ReplyParameters::new(id));
        }
        if let Some(markup) = reply.markup {
            req = req.reply_markup(markup);
        }
        req.await?;
        Ok(())
    }

    async fn edit_html(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: String,
        markup: Option<InlineKeyboardMarkup>,
    ) -> ResponseResult<()> {
        let mut req = self
            .edit_message_text(chat_id, message_id, text)
            .parse_mode(ParseMode::Html);
        if let Some(markup) = markup {
            req = req.reply_markup(markup);
        }
        req.await?;
        Ok(())
    }

    async fn answer_callback(&self, id: &str, alert: Option<&str>) -> ResponseResult<()> {
        let mut req = self.answer_callback_query(id);
        if let Some(text) = alert {
            req = req.text(text).show_alert(true);
        }
        req.await?;
        Ok(())
    }

    async fn my_commands(&self) -> ResponseResult<Vec<BotCommand>> {
        self.get_my_commands().await
    }
}
