//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod help;
pub mod menu;
pub mod start;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "ReloCompass commands:")]
pub enum Command {
    #[command(description = "Start the relocation survey")]
    Start,
    #[command(description = "Open the main menu")]
    Menu,
    #[command(description = "Show help information")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, services: &ServiceFactory) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services).await,
        Command::Menu => menu::handle_menu(bot, msg, services).await,
        Command::Help => help::handle_help(bot, msg, services).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "relocompass_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/menu", "relocompass_bot").unwrap(), Command::Menu);
        assert_eq!(Command::parse("/help@relocompass_bot", "relocompass_bot").unwrap(), Command::Help);
        assert!(Command::parse("/catalog", "relocompass_bot").is_err());
    }

    #[test]
    fn test_command_list_for_telegram() {
        let commands = Command::bot_commands();
        let names: Vec<&str> = commands
            .iter()
            .map(|c| c.command.trim_start_matches('/'))
            .collect();
        assert_eq!(names, vec!["start", "menu", "help"]);
    }
}
