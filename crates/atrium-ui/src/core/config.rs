//! Shell configuration and its defaults.
//!
//! # Design
//! - Every field has a default, so an absent or partial document is valid.
//! - Values are validated once at boot; invalid documents fall back to defaults upstream.

use crate::core::routes::DEFAULT_TRANSITION_MS;
use crate::core::toast::DEFAULT_TOAST_LIFETIME_MS;
use serde::Deserialize;

/// Default local-storage key for the theme flag.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "atrium.darkMode";
/// Default prefix for help documents.
pub const DEFAULT_HELP_BASE_URL: &str = "/help";

/// Errors raised while reading the shell configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`ShellConfig`].
    #[error("invalid shell config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds an unusable value.
    #[error("invalid shell config field `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Runtime settings for the shell.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Local-storage key holding `"true"`/`"false"` for dark mode.
    pub theme_storage_key: String,
    /// Toast lifetime in milliseconds.
    pub toast_lifetime_ms: u32,
    /// Duration of the route transition flag in milliseconds.
    pub transition_ms: u32,
    /// Prefix prepended to data-layer request paths.
    pub data_base_url: String,
    /// Prefix for help documents opened from the error banner.
    pub help_base_url: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            toast_lifetime_ms: DEFAULT_TOAST_LIFETIME_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            data_base_url: String::new(),
            help_base_url: DEFAULT_HELP_BASE_URL.to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a value is unusable.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for the first unusable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme_storage_key",
                reason: "must not be empty",
            });
        }
        if self.toast_lifetime_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "toast_lifetime_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Join a data-layer path onto [`ShellConfig::data_base_url`].
    #[must_use]
    pub fn data_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.data_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() -> Result<(), ConfigError> {
        let config = ShellConfig::from_json("{}")?;
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.toast_lifetime_ms, 5_000);
        assert_eq!(config.transition_ms, 150);
        Ok(())
    }

    #[test]
    fn partial_document_overrides_fields() -> Result<(), ConfigError> {
        let config =
            ShellConfig::from_json(r#"{"toast_lifetime_ms": 2500, "data_base_url": "/v1/"}"#)?;
        assert_eq!(config.toast_lifetime_ms, 2_500);
        assert_eq!(config.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
        assert_eq!(config.data_url("/portfolio"), "/v1/portfolio");
        Ok(())
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            ShellConfig::from_json(r#"{"toast_lifetime_ms": 0}"#),
            Err(ConfigError::Invalid {
                field: "toast_lifetime_ms",
                ..
            })
        ));
        assert!(matches!(
            ShellConfig::from_json(r#"{"theme_storage_key": " "}"#),
            Err(ConfigError::Invalid {
                field: "theme_storage_key",
                ..
            })
        ));
        assert!(matches!(
            ShellConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
