//! Services module
//!
//! This module contains the bot's business logic: the onboarding dialogue,
//! the main menu and the routing of inbound interactions between them.

pub mod dialogue;
pub mod keyboards;
pub mod menu;

pub use dialogue::DialogueEngine;
pub use menu::MenuDispatcher;

use std::sync::Arc;
use chrono::Duration;
use tracing::debug;

use crate::config::settings::Settings;
use crate::i18n::I18n;
use crate::models::{CallbackData, MenuAction, Outcome, Reply};
use crate::state::SessionStore;
use crate::utils::errors::{ReloCompassError, Result};
use crate::utils::logging;

/// Service factory for creating and sharing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub dialogue: DialogueEngine,
    pub menu: MenuDispatcher,
    pub i18n: Arc<I18n>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, store: Arc<dyn SessionStore>, i18n: Arc<I18n>) -> Result<Self> {
        let session_ttl = session_ttl(settings.session.ttl_seconds)?;

        Ok(Self {
            dialogue: DialogueEngine::new(store, i18n.clone(), session_ttl),
            menu: MenuDispatcher::new(i18n.clone()),
            i18n,
        })
    }

    /// Route a raw interaction identifier to its handler.
    ///
    /// Identifiers that do not decode produce [`Outcome::UnknownCommand`]
    /// and touch no state.
    pub async fn handle_interaction(&self, user_id: i64, data: &str, lang: &str) -> Result<Outcome> {
        match data.parse::<CallbackData>() {
            Ok(CallbackData::Answer(answer)) => self.dialogue.submit_answer(user_id, answer, lang).await,
            Ok(CallbackData::Menu(action)) => {
                debug!(user_id = user_id, action = ?action, "Menu action");
                Ok(Outcome::Reply(self.menu.dispatch(action, lang)))
            }
            Err(e) => {
                logging::log_unknown_interaction(user_id, data, &e.to_string());
                Ok(Outcome::UnknownCommand)
            }
        }
    }

    /// Start onboarding for a user
    pub async fn start(&self, user_id: i64, lang: &str) -> Result<Reply> {
        self.dialogue.begin(user_id, lang).await
    }

    /// Show the main menu
    pub fn main_menu(&self, lang: &str) -> Reply {
        self.menu.dispatch(MenuAction::Menu, lang)
    }

    /// Text of the transient "unknown command" acknowledgement
    pub fn unknown_command_text(&self, lang: &str) -> String {
        self.i18n.t("messages.unknown_command", lang, None)
    }

    /// Language to answer a Telegram user in
    pub fn language_for(&self, telegram_lang: Option<&str>) -> String {
        self.i18n.detect_user_language(telegram_lang)
    }
}

/// Session TTL as a chrono duration; out-of-range values are a config error
fn session_ttl(ttl_seconds: u64) -> Result<Duration> {
    i64::try_from(ttl_seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| ReloCompassError::Config(format!("Session TTL out of range: {} seconds", ttl_seconds)))
}
