//! ReloCompass Telegram Bot
//!
//! A lead-generation assistant for a real-estate relocation service. Users
//! answer a short survey (relocation stage, family size, budget, region) and
//! then get access to the main menu. This library provides the onboarding
//! state machine, session storage, localized texts and Telegram handlers.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ReloCompassError, Result};

// Re-export main components for easy access
pub use i18n::I18n;
pub use services::ServiceFactory;
pub use state::{InMemorySessionStore, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
