//! ReloCompass Telegram Bot
//!
//! Main application entry point

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use relocompass::{
    config::Settings,
    utils::logging,
    state::{build_session_store, start_cleanup},
    services::ServiceFactory,
    i18n::I18n,
    handlers::{Command, handle_command, handle_callback_query, handle_message},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    if let Err(e) = settings.validate() {
        error!(error = %e, "Invalid configuration, refusing to start");
        return Err(e.into());
    }

    info!("Starting {}...", relocompass::info());

    // Initialize i18n system
    let mut i18n = I18n::with_embedded(&settings.i18n)?;
    if let Some(dir) = &settings.i18n.translations_dir {
        info!("Loading translations from {}", dir);
        i18n.load_translations(Path::new(dir)).await?;
    }

    // Initialize session storage
    let store = build_session_store(&settings).await?;
    let cleanup_handle = start_cleanup(
        store.clone(),
        Duration::from_secs(settings.session.cleanup_interval_seconds),
    );

    let services = Arc::new(ServiceFactory::new(&settings, store, Arc::new(i18n))?);

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![services])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;
    cleanup_handle.abort();

    info!("ReloCompass bot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(dptree::endpoint(handle_messages)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let user_id = msg.from.as_ref().map(|u| u.id.0 as i64);

    if let Err(e) = handle_command(bot, msg, cmd, &services).await {
        logging::log_handler_error("command", user_id, &e);
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, services: Arc<ServiceFactory>) -> HandlerResult {
    let user_id = msg.from.as_ref().map(|u| u.id.0 as i64);

    if let Err(e) = handle_message(bot, msg, &services).await {
        logging::log_handler_error("message", user_id, &e);
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;

    if let Err(e) = handle_callback_query(bot, query, &services).await {
        logging::log_handler_error("callback", Some(user_id), &e);
        return Err(e.into());
    }

    Ok(())
}
