use teloxide::prelude::*;

use crate::{
    api::Reply,
    help::send_help_menu,
    start::{start_reply, UserDescriptor},
    texts, Api, Command, Store,
};

pub(crate) async fn command_handler(
    api: Api,
    msg: Message,
    cmd: Command,
    store: Store,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let user = msg.from.as_ref().map(UserDescriptor::from);
            let text = start_reply(store.as_ref(), user).await;
            api.send(msg.chat.id, Reply::new(text).html().reply_to(msg.id)).await?;
        }
        Command::Help => send_help_menu(api.as_ref(), &msg).await?,
    };

    Ok(())
}

/// Answer on everything, which is not a known command
pub(crate) async fn message_handler(api: Api, msg: Message) -> ResponseResult<()> {
    log::debug!("unknown message in chat {}", msg.chat.id);
    api.send(msg.chat.id, Reply::new(texts::UNKNOWN_MESSAGE)).await?;
    Ok(())
}
