//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ReloCompass bot.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::models::{LeadRecord, WireValue};
use crate::utils::errors::{ErrorSeverity, ReloCompassError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must live as long
/// as the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| ReloCompassError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "relocompass.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(filter)
        .try_init()
        .map_err(|e| ReloCompassError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Emit the lead record of a completed onboarding
pub fn log_lead_captured(record: &LeadRecord) {
    info!(
        target: "relocompass::leads",
        lead_id = %record.lead_id,
        user_id = record.user_id,
        stage = record.answers.stage.map(|v| v.as_str()),
        family = record.answers.family.map(|v| v.as_str()),
        budget = record.answers.budget.map(|v| v.as_str()),
        region = record.answers.region.map(|v| v.as_str()),
        completed_at = %record.completed_at,
        "User completed onboarding"
    );
}

/// Log an interaction identifier nobody handles
pub fn log_unknown_interaction(user_id: i64, data: &str, reason: &str) {
    debug!(
        user_id = user_id,
        data = data,
        reason = reason,
        "Unknown interaction received"
    );
}

/// Report an error returned by an update handler at the level its severity calls for
pub fn log_handler_error(handler: &str, user_id: Option<i64>, err: &ReloCompassError) {
    let severity = err.severity();
    match severity {
        ErrorSeverity::Info => info!(handler = handler, user_id = user_id, error = %err, "Update rejected"),
        ErrorSeverity::Warning => warn!(handler = handler, user_id = user_id, error = %err, "Update handling failed"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(handler = handler, user_id = user_id, severity = %severity, error = %err, "Update handling failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_handler_error_level_follows_severity() {
        let delivery = ReloCompassError::Telegram(teloxide::RequestError::Api(teloxide::ApiError::BotBlocked));
        log_handler_error("callback", Some(7), &delivery);
        assert!(logs_contain("WARN"));

        let config = ReloCompassError::Config("broken".to_string());
        log_handler_error("command", None, &config);
        assert!(logs_contain("CRITICAL"));
        assert!(logs_contain("ERROR"));
    }
}
