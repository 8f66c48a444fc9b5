//! Rendering replies as Telegram messages

use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId};
use teloxide::{ApiError, RequestError};
use tracing::debug;

use crate::models::Reply;
use crate::utils::errors::Result;

/// One button per row, in option order; `None` when there are no options
pub fn keyboard(reply: &Reply) -> Option<InlineKeyboardMarkup> {
    if reply.options.is_empty() {
        return None;
    }

    Some(InlineKeyboardMarkup::new(reply.options.iter().map(|option| {
        vec![InlineKeyboardButton::callback(option.label.clone(), option.data.to_string())]
    })))
}

/// Send a reply as a new message
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<()> {
    let mut request = bot.send_message(chat_id, reply.text.clone());
    if let Some(markup) = keyboard(reply) {
        request = request.reply_markup(markup);
    }

    request.await?;
    Ok(())
}

/// Replace the text and keyboard of an earlier bot message
pub async fn edit_reply(bot: &Bot, chat_id: ChatId, message_id: MessageId, reply: &Reply) -> Result<()> {
    let mut request = bot.edit_message_text(chat_id, message_id, reply.text.clone());
    if let Some(markup) = keyboard(reply) {
        request = request.reply_markup(markup);
    }

    match request.await {
        Ok(_) => Ok(()),
        // Pressing the button of the screen already shown
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            debug!(chat_id = ?chat_id, "Message already shows this reply");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
