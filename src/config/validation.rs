//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{ReloCompassError, Result};
use super::{SessionBackend, Settings};

/// Longest accepted session TTL (one year)
pub const MAX_SESSION_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_session_config(&settings.session)?;
    if settings.session.backend == SessionBackend::Redis {
        validate_redis_config(&settings.redis)?;
    }
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(ReloCompassError::Config(
            "BOT_TOKEN is required".to_string()
        ));
    }

    Ok(())
}

fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.ttl_seconds == 0 {
        return Err(ReloCompassError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    if config.ttl_seconds > MAX_SESSION_TTL_SECONDS {
        return Err(ReloCompassError::Config(format!(
            "Session TTL must not exceed {} seconds",
            MAX_SESSION_TTL_SECONDS
        )));
    }

    if config.cleanup_interval_seconds == 0 {
        return Err(ReloCompassError::Config(
            "Session cleanup interval must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ReloCompassError::Config(
            "Redis URL is required for the redis session backend".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.supported_languages.is_empty() {
        return Err(ReloCompassError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(ReloCompassError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ReloCompassError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "12345:test_token".to_string();
        settings
    }

    #[test]
    fn test_defaults_with_token_are_valid() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let mut settings = valid_settings();
        settings.bot.token = "   ".to_string();
        assert_matches!(
            validate_settings(&settings),
            Err(ReloCompassError::Config(msg)) if msg.contains("BOT_TOKEN")
        );
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let mut settings = valid_settings();
        settings.session.ttl_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_oversized_ttl_is_rejected() {
        let mut settings = valid_settings();
        for ttl in [MAX_SESSION_TTL_SECONDS + 1, 100_000_000_000_000_000, u64::MAX] {
            settings.session.ttl_seconds = ttl;
            assert_matches!(
                validate_settings(&settings),
                Err(ReloCompassError::Config(msg)) if msg.contains("TTL")
            );
        }

        settings.session.ttl_seconds = MAX_SESSION_TTL_SECONDS;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_zero_cleanup_interval_is_rejected() {
        let mut settings = valid_settings();
        settings.session.cleanup_interval_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_redis_url_only_checked_for_redis_backend() {
        let mut settings = valid_settings();
        settings.redis.url.clear();
        assert!(validate_settings(&settings).is_ok());

        settings.session.backend = SessionBackend::Redis;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_default_language_must_be_supported() {
        let mut settings = valid_settings();
        settings.i18n.default_language = "de".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
