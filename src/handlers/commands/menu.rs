//! Menu command handler

use teloxide::{Bot, types::Message};
use crate::handlers::delivery::send_reply;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle /menu command
pub async fn handle_menu(bot: Bot, msg: Message, services: &ServiceFactory) -> Result<()> {
    let lang = services.language_for(msg.from.as_ref().and_then(|u| u.language_code.as_deref()));
    let reply = services.main_menu(&lang);

    send_reply(&bot, msg.chat.id, &reply).await
}
