//! Test data helpers for creating Telegram objects
//!
//! Objects are built from Bot API JSON so they match what teloxide receives
//! from Telegram.

use serde_json::{json, Value};
use teloxide::types::{CallbackQuery, Message};

fn user_json(user_id: i64, language_code: Option<&str>) -> Value {
    let mut user = json!({
        "id": user_id,
        "is_bot": false,
        "first_name": "Test",
        "username": "test_user"
    });

    if let Some(lang) = language_code {
        user["language_code"] = json!(lang);
    }

    user
}

fn private_chat_json(chat_id: i64) -> Value {
    json!({
        "id": chat_id,
        "type": "private",
        "first_name": "Test",
        "username": "test_user"
    })
}

fn group_chat_json(chat_id: i64) -> Value {
    json!({
        "id": chat_id,
        "type": "supergroup",
        "title": "Test Group"
    })
}

fn message_json(message_id: i32, from: Value, chat: Value, text: &str) -> Value {
    let mut message = json!({
        "message_id": message_id,
        "from": from,
        "chat": chat,
        "date": 1640995200,
        "text": text
    });

    if text.starts_with('/') {
        let command_len = text.split_whitespace().next().map_or(0, str::len);
        message["entities"] = json!([{ "type": "bot_command", "offset": 0, "length": command_len }]);
    }

    message
}

/// A text message from a user in their private chat with the bot
pub fn create_private_message(user_id: i64, text: &str, language_code: Option<&str>) -> Message {
    let value = message_json(1, user_json(user_id, language_code), private_chat_json(user_id), text);
    serde_json::from_value(value).expect("valid private message json")
}

/// A text message from a user in a group chat
pub fn create_group_message(user_id: i64, chat_id: i64, text: &str) -> Message {
    let value = message_json(1, user_json(user_id, None), group_chat_json(chat_id), text);
    serde_json::from_value(value).expect("valid group message json")
}

/// A button press on a bot message shown in the user's private chat
pub fn create_callback_query(user_id: i64, data: &str, language_code: Option<&str>) -> CallbackQuery {
    let bot = json!({
        "id": 12345,
        "is_bot": true,
        "first_name": "ReloCompass",
        "username": "relocompass_bot"
    });

    let value = json!({
        "id": "4382bfdwdsb323b2d9",
        "from": user_json(user_id, language_code),
        "message": message_json(42, bot, private_chat_json(user_id), "Previous screen"),
        "chat_instance": "-7265523497854938716",
        "data": data
    });

    serde_json::from_value(value).expect("valid callback query json")
}

/// A button press whose originating message is no longer available
pub fn create_detached_callback_query(user_id: i64, data: &str) -> CallbackQuery {
    let value = json!({
        "id": "4382bfdwdsb323b2e0",
        "from": user_json(user_id, None),
        "chat_instance": "-7265523497854938716",
        "data": data
    });

    serde_json::from_value(value).expect("valid callback query json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::MaybeInaccessibleMessage;

    #[test]
    fn test_create_private_message() {
        let msg = create_private_message(42, "/start", Some("en"));
        assert_eq!(msg.chat.id.0, 42);
        assert_eq!(msg.text(), Some("/start"));
        assert_eq!(msg.from.unwrap().language_code.as_deref(), Some("en"));
    }

    #[test]
    fn test_create_callback_query() {
        let query = create_callback_query(42, "stage_planning", None);
        assert_eq!(query.data.as_deref(), Some("stage_planning"));
        assert!(matches!(query.message, Some(MaybeInaccessibleMessage::Regular(_))));
    }
}
