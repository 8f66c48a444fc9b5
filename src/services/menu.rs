//! Main menu screens
//!
//! Fixed informational screens, each shown with the main menu. Catalog, visa
//! assistant and statistics are placeholders for now.

use std::sync::Arc;
use crate::i18n::I18n;
use crate::models::{MenuAction, Reply, WireValue};
use super::keyboards::main_menu_options;

/// Stateless lookup from menu action to screen
#[derive(Debug, Clone)]
pub struct MenuDispatcher {
    i18n: Arc<I18n>,
}

impl MenuDispatcher {
    pub fn new(i18n: Arc<I18n>) -> Self {
        Self { i18n }
    }

    pub fn dispatch(&self, action: MenuAction, lang: &str) -> Reply {
        let key = match action {
            MenuAction::Menu => "menu.main".to_string(),
            other => format!("menu.{}", other.as_str()),
        };

        Reply::new(self.i18n.t(&key, lang, None), main_menu_options(&self.i18n, lang))
    }
}
