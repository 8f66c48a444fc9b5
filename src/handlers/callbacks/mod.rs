//! Callback query handlers module
//!
//! Every inline button press lands here: the callback data is routed through
//! the services and the originating message is replaced with the reply.

use teloxide::{Bot, types::{CallbackQuery, ChatId, MaybeInaccessibleMessage}, prelude::*};
use tracing::{debug, info, warn};
use crate::handlers::delivery::{edit_reply, send_reply};
use crate::models::Outcome;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Main callback query dispatcher
pub async fn handle_callback_query(bot: Bot, query: CallbackQuery, services: &ServiceFactory) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let lang = services.language_for(query.from.language_code.as_deref());

    let Some(data) = query.data.as_deref() else {
        debug!(user_id = user_id, "Callback query without data");
        bot.answer_callback_query(query.id.clone()).await?;
        return Ok(());
    };

    info!(user_id = user_id, callback_data = %data, "Callback query received");

    match services.handle_interaction(user_id, data, &lang).await? {
        Outcome::UnknownCommand => {
            bot.answer_callback_query(query.id.clone())
                .text(services.unknown_command_text(&lang))
                .show_alert(true)
                .await?;
        }
        Outcome::Reply(reply) => {
            // Answer first to remove the loading state on the button
            if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
                warn!(user_id = user_id, error = %e, "Failed to answer callback query");
            }

            match &query.message {
                Some(MaybeInaccessibleMessage::Regular(message)) => {
                    edit_reply(&bot, message.chat.id, message.id, &reply).await?;
                }
                _ => {
                    send_reply(&bot, ChatId(user_id), &reply).await?;
                }
            }
        }
    }

    debug!(user_id = user_id, "Callback query processed");
    Ok(())
}
