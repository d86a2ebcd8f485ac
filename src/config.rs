//! Startup configuration.
//!
//! The only required value is the API key. Everything else has a default
//! and can be overridden through the environment.

use std::env;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Checked in order; the first non-empty value wins.
const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY", "GOOGLE_API_KEY"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is missing. Set API_KEY (or GEMINI_API_KEY) to a valid Gemini API key.")]
    MissingApiKey,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub chat_model: String,
    pub image_model: String,
    pub temperature: f32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|key| non_empty(*key))
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            api_base: non_empty("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            chat_model: non_empty("STUDIO_CHAT_MODEL")
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            image_model: non_empty("STUDIO_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            temperature: CHAT_TEMPERATURE,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        tracing::debug!("loaded configuration from .env");
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if env::var(key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(source: &str) -> Vec<(&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_a_distinct_error() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::MissingApiKey)
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("API_KEY", "   ")])),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.temperature, CHAT_TEMPERATURE);
    }

    #[test]
    fn falls_back_to_gemini_key_and_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "g-key"),
            ("GEMINI_API_BASE", "http://localhost:8080/v1beta/"),
            ("STUDIO_CHAT_MODEL", "gemini-2.5-flash"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "g-key");
        assert_eq!(config.api_base, "http://localhost:8080/v1beta");
        assert_eq!(config.chat_model, "gemini-2.5-flash");
    }

    #[test]
    fn parses_env_lines() {
        let parsed = parse_env_lines("# comment\n\nAPI_KEY = abc\nBROKEN\n=value\nGEMINI_API_BASE=http://x\n");
        assert_eq!(
            parsed,
            vec![("API_KEY", "abc"), ("GEMINI_API_BASE", "http://x")]
        );
    }
}
