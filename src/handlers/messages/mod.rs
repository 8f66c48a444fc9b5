//! Message handlers module
//!
//! Plain text that is not a command gets a pointer to /start and /menu.

use teloxide::{Bot, types::Message, prelude::*};
use tracing::debug;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle incoming non-command messages
pub async fn handle_message(bot: Bot, msg: Message, services: &ServiceFactory) -> Result<()> {
    let chat_id = msg.chat.id;

    if !chat_id.is_user() {
        debug!(chat_id = ?chat_id, "Ignoring message outside a private chat");
        return Ok(());
    }

    let lang = services.language_for(msg.from.as_ref().and_then(|u| u.language_code.as_deref()));
    bot.send_message(chat_id, services.i18n.t("messages.use_start", &lang, None)).await?;
    Ok(())
}
