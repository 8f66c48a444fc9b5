//! Test helpers module
//!
//! Mock Telegram server, Telegram object builders and a ready-made service
//! context backed by the in-memory session store.

pub mod telegram_mock;
pub mod test_context;
pub mod test_data;

pub use telegram_mock::*;
pub use test_context::*;
pub use test_data::*;
