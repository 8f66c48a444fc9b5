//! Mock Telegram API Server for testing
//!
//! Simulates the handful of Bot API methods the bot calls, using wiremock.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self { success: true }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// API root to hand to `Bot::set_api_url`; teloxide appends `/bot<token>/<method>`
    pub fn api_url(&self) -> url::Url {
        self.server.uri().parse().expect("mock server uri is a valid url")
    }

    /// A bot talking to this server
    pub fn bot(&self) -> teloxide::Bot {
        teloxide::Bot::new(test_bot_token()).set_api_url(self.api_url())
    }

    async fn mount(&self, endpoint: &str, config: MockResponseConfig, ok_result: Value, error_description: &str) {
        let (status, body) = if config.success {
            (200, json!({ "ok": true, "result": ok_result }))
        } else {
            (
                400,
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": error_description
                }),
            )
        };

        // teloxide spells methods with a capital first letter (`SendMessage`)
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)^/bot{}/{}$", test_bot_token(), endpoint)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        self.mount(
            "sendMessage",
            config,
            bot_message_json(123, "Test message", None),
            "Bad Request: message text is empty",
        )
        .await;
    }

    /// Setup mock for editMessageText endpoint
    pub async fn mock_edit_message_text(&self, config: MockResponseConfig) {
        self.mount(
            "editMessageText",
            config,
            bot_message_json(123, "Edited test message", Some(1640995260)),
            "Bad Request: message to edit not found",
        )
        .await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self, config: MockResponseConfig) {
        self.mount(
            "answerCallbackQuery",
            config,
            json!(true),
            "Bad Request: query is too old and response timeout expired",
        )
        .await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();

        self.mock_send_message(config.clone()).await;
        self.mock_edit_message_text(config.clone()).await;
        self.mock_answer_callback_query(config).await;
    }

    /// Setup mocks for error scenarios
    pub async fn setup_error_mocks(&self) {
        let config = MockResponseConfig { success: false };

        self.mock_send_message(config.clone()).await;
        self.mock_edit_message_text(config.clone()).await;
        self.mock_answer_callback_query(config).await;
    }

    /// Bodies of the requests sent to one endpoint, in order
    pub async fn request_bodies(&self, endpoint: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| is_call_to(req, endpoint))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let received_requests = self.server.received_requests().await.unwrap_or_default();
        let matching_requests = received_requests
            .iter()
            .filter(|req| is_call_to(req, endpoint))
            .count();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// Whether `req` invoked the Bot API method `endpoint`, ignoring its case
fn is_call_to(req: &Request, endpoint: &str) -> bool {
    req.url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .is_some_and(|name| name.eq_ignore_ascii_case(endpoint))
}

/// A message sent by the bot into the test user's private chat
fn bot_message_json(message_id: i32, text: &str, edit_date: Option<i64>) -> Value {
    let mut message = json!({
        "message_id": message_id,
        "from": {
            "id": 12345,
            "is_bot": true,
            "first_name": "ReloCompass",
            "username": "relocompass_bot"
        },
        "chat": {
            "id": test_user_id(),
            "type": "private",
            "first_name": "Test"
        },
        "date": 1640995200,
        "text": text
    });

    if let Some(edit_date) = edit_date {
        message["edit_date"] = json!(edit_date);
    }

    message
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}

/// Helper function to create a test group chat ID
pub fn test_group_chat_id() -> i64 {
    -1001234567890
}
