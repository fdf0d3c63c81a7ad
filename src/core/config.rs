//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::{Result, TranslateError};

/// The three substitution placeholders a URL template must carry, in the
/// order they are filled: encoded text, target language, source language.
const PLACEHOLDERS: [&str; 3] = ["{0}", "{1}", "{2}"];

/// Configuration for the translation endpoint.
///
/// Loaded once per action invocation and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// URL template with `{0}` (percent-encoded text), `{1}` (target
    /// language) and `{2}` (source language) placeholders
    pub url_template: String,
    /// Language code to translate into
    pub target_lang: String,
    /// Language code of the selected text
    pub source_lang: String,
}

impl TranslationConfig {
    /// Build a configuration from explicit values.
    pub fn new(
        url_template: impl Into<String>,
        target_lang: impl Into<String>,
        source_lang: impl Into<String>,
    ) -> Self {
        Self {
            url_template: url_template.into(),
            target_lang: target_lang.into(),
            source_lang: source_lang.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// All three variables are required; a missing one fails here rather
    /// than at first use.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            url_template: require_env("TRANSLATOR_URL_TEMPLATE")?,
            target_lang: require_env("TRANSLATOR_TARGET_LANG")?,
            source_lang: require_env("TRANSLATOR_SOURCE_LANG")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.url_template.is_empty() {
            return Err(TranslateError::MissingField {
                field: "url_template".to_string(),
            });
        }
        if self.target_lang.is_empty() {
            return Err(TranslateError::MissingField {
                field: "target_lang".to_string(),
            });
        }
        if self.source_lang.is_empty() {
            return Err(TranslateError::MissingField {
                field: "source_lang".to_string(),
            });
        }
        for placeholder in PLACEHOLDERS {
            if !self.url_template.contains(placeholder) {
                return Err(TranslateError::ConfigError {
                    message: format!(
                        "url_template is missing the {} placeholder",
                        placeholder
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Read a required environment variable.
fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| TranslateError::MissingField {
        field: name.to_string(),
    })
}
