//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The listen address is not part of this struct: it comes from
//! `[package.metadata.leptos]` and `LEPTOS_SITE_ADDR` through leptos itself.

use crate::core::effects_config::EffectsConfig;

/// Environment variable holding a JSON [`EffectsConfig`] override
pub const EFFECTS_ENV_VAR: &str = "MAGIC_UI_EFFECTS";

/// Environment variable holding the tracing filter
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MAGIC_UI_EFFECTS is not valid effects JSON: {0}")]
    InvalidEffects(#[from] serde_json::Error),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Effect tuning handed to the page
    pub effects: EffectsConfig,

    /// `tracing-subscriber` filter directive
    /// Example: info,magic_ui=debug
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let effects = match lookup(EFFECTS_ENV_VAR) {
            Some(json) if !json.trim().is_empty() => EffectsConfig::from_json(&json)?,
            _ => EffectsConfig::default(),
        };

        let log_filter = lookup(LOG_ENV_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            effects,
            log_filter,
        })
    }

    /// Check if the effects were overridden from the environment
    pub fn has_custom_effects(&self) -> bool {
        self.effects != EffectsConfig::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            effects: EffectsConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_with_no_vars() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.has_custom_effects());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_config_with_effects_override() {
        let config =
            Config::from_lookup(lookup(&[(EFFECTS_ENV_VAR, r#"{"min_fps": 24}"#)])).unwrap();
        assert_eq!(config.effects.min_fps, 24);
        assert!(config.has_custom_effects());
    }

    #[test]
    fn test_config_with_blank_effects() {
        let config = Config::from_lookup(lookup(&[(EFFECTS_ENV_VAR, "  ")])).unwrap();
        assert!(!config.has_custom_effects());
    }

    #[test]
    fn test_config_with_invalid_effects() {
        let err = Config::from_lookup(lookup(&[(EFFECTS_ENV_VAR, "not json")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEffects(_)));
        assert!(err.to_string().starts_with("MAGIC_UI_EFFECTS is not valid effects JSON"));
    }

    #[test]
    fn test_config_with_log_filter() {
        let config = Config::from_lookup(lookup(&[(LOG_ENV_VAR, "debug,hyper=warn")])).unwrap();
        assert_eq!(config.log_filter, "debug,hyper=warn");

        let config = Config::from_lookup(lookup(&[(LOG_ENV_VAR, "")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
