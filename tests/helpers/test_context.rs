//! Test context for unified test setup
//!
//! Builds the services the way `main` does, but over an in-memory session
//! store so tests can look at stored sessions directly.

use relocompass::config::Settings;
use relocompass::{I18n, InMemorySessionStore, ServiceFactory};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Services plus direct access to their session store
pub struct TestContext {
    pub store: Arc<InMemorySessionStore>,
    pub services: ServiceFactory,
}

impl TestContext {
    pub fn new() -> Self {
        init_test_logging();

        let mut settings = Settings::default();
        settings.bot.token = super::test_bot_token();

        let store = Arc::new(InMemorySessionStore::new());
        let i18n = Arc::new(I18n::with_embedded(&settings.i18n).expect("embedded translations load"));
        let services = ServiceFactory::new(&settings, store.clone(), i18n).expect("default settings build services");

        Self { store, services }
    }
}
