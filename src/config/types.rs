use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "keySeparator")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Used when a locale is requested with an empty language.
    pub default_language: String,

    /// Directory holding `<language>.<extension>` files.
    pub locales_dir: PathBuf,
    pub extension: String,

    pub key_separator: String,

    /// Number of cached locales before the oldest is evicted.
    /// `0` keeps every locale.
    pub cache_capacity: usize,
}

impl I18nSettings {
    /// Conventional source file for `language`: `<localesDir>/<language>.<extension>`.
    #[must_use]
    pub fn default_source_path(&self, language: &str) -> PathBuf {
        self.locales_dir.join(format!("{language}.{}", self.extension))
    }

    /// # Errors
    /// - Required field is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_language.is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The default language cannot be empty. Example: \"zh-CN\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.extension.is_empty() {
            errors.push(ValidationError::new(
                "extension",
                "The extension cannot be empty. Example: \"yaml\" or \"json\"",
            ));
        } else if self.extension.starts_with('.') {
            errors.push(ValidationError::new(
                "extension",
                format!("Remove the leading dot from '{}'", self.extension),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: "zh-CN".to_string(),
            locales_dir: PathBuf::from("locales"),
            extension: "yaml".to_string(),
            key_separator: ".".to_string(),
            cache_capacity: 3,
        }
    }
}
