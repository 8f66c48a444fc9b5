//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality including
//! translation loading, language detection, and message formatting.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, info, warn};
use crate::utils::errors::{ReloCompassError, Result};
use crate::config::I18nConfig;

/// Translation bundles compiled into the binary
const EMBEDDED_TRANSLATIONS: &[(&str, &str)] = &[
    ("ru", include_str!("../../translations/ru.json")),
    ("en", include_str!("../../translations/en.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create a new I18n instance with no translations loaded
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
        }
    }

    /// Create an instance with the built-in bundles loaded
    pub fn with_embedded(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self::new(config);
        i18n.load_embedded()?;
        Ok(i18n)
    }

    /// Load the built-in bundles of every supported language
    pub fn load_embedded(&mut self) -> Result<()> {
        for (lang_code, content) in EMBEDDED_TRANSLATIONS {
            if self.is_language_supported(lang_code) {
                self.insert_bundle(lang_code, content)?;
            }
        }

        if !self.translations.contains_key(&self.default_language) {
            return Err(ReloCompassError::Config(format!(
                "No built-in translations for default language: {}",
                self.default_language
            )));
        }

        Ok(())
    }

    /// Replace bundles with `<lang>.json` files found in `dir`
    pub async fn load_translations(&mut self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            return Err(ReloCompassError::Config(format!(
                "Translations directory not found: {}",
                dir.display()
            )));
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                let content = fs::read_to_string(&file_path).await?;
                self.insert_bundle(lang_code, &content)?;
                info!("Loaded translations for language: {}", lang_code);
            } else {
                warn!("Translation file not found, keeping built-in texts: {}", file_path.display());
            }
        }

        Ok(())
    }

    fn insert_bundle(&mut self, lang_code: &str, content: &str) -> Result<()> {
        match serde_json::from_str(content)? {
            Value::Object(map) => {
                debug!("Loaded {} top-level translation keys for {}", map.len(), lang_code);
                self.translations.insert(lang_code.to_string(), map);
                Ok(())
            }
            _ => Err(ReloCompassError::Config(format!(
                "Invalid translation file format for {}",
                lang_code
            ))),
        }
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let text = self
            .get_translation_value(key, effective_lang)
            .or_else(|| self.get_translation_value(key, &self.default_language));

        match text {
            Some(text) => self.format_message(text, params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language<'a>(&'a self, lang: &'a str) -> &'a str {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang
        } else {
            &self.default_language
        }
    }

    /// Get a string from the nested JSON structure, e.g. "onboarding.welcome"
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&str> {
        let translations = self.translations.get(lang)?;

        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }

        current.as_str()
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        let mut result = template.to_string();
        if let Some(params) = params {
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
        }
        result
    }

    /// Detect user language from Telegram language code
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            // Extract language code from locale (e.g., "en-US" -> "en")
            let lang_code = lang.split('-').next().unwrap_or(lang);

            if self.is_language_supported(lang_code) {
                return lang_code.to_string();
            }
        }

        self.default_language.clone()
    }
}
