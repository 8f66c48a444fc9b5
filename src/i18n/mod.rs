//! Internationalization module
//!
//! Russian and English texts for every prompt, button and menu screen, with
//! built-in bundles and optional overrides from disk.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
