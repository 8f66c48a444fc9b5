//! Start command handler
//!
//! Handles the /start command, the entry point of the onboarding survey

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::delivery::send_reply;
use crate::services::ServiceFactory;
use crate::utils::errors::{ReloCompassError, Result};

/// Handle /start command - (re)start onboarding and ask the first question
pub async fn handle_start(bot: Bot, msg: Message, services: &ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        ReloCompassError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;
    let lang = services.language_for(user.language_code.as_deref());

    debug!(user_id = user_id, chat_id = ?chat_id, lang = %lang, "Processing /start command");

    let reply = services.start(user_id, &lang).await?;
    send_reply(&bot, chat_id, &reply).await
}
