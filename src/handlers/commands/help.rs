//! Help command handler

use teloxide::{Bot, types::Message};
use crate::handlers::delivery::send_reply;
use crate::models::MenuAction;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, services: &ServiceFactory) -> Result<()> {
    let lang = services.language_for(msg.from.as_ref().and_then(|u| u.language_code.as_deref()));
    let reply = services.menu.dispatch(MenuAction::Help, &lang);

    send_reply(&bot, msg.chat.id, &reply).await
}
