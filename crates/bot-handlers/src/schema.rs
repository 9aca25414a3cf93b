use teloxide::{dispatching::UpdateHandler, prelude::*, RequestError};

use crate::{
    bot_messages::{command_handler, message_handler},
    help::help_callback_handler,
    Command,
};

/// Updates routing. Handlers expect [`Api`](crate::Api) and
/// [`Store`](crate::Store) in dependencies
pub fn schema() -> UpdateHandler<RequestError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(command_handler),
                )
                .branch(dptree::endpoint(message_handler)),
        )
        .branch(Update::filter_callback_query().endpoint(help_callback_handler))
}
