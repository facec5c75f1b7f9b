//! Runtime configuration sourced from the environment.
//!
//! `load_dotenv` fills the environment from `.env` (desktop dev) or the bundled
//! `assets/config.env`; `AppConfig::from_env` then reads the resolved values.

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Credential variables, checked in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_key: API_KEY_VARS.iter().find_map(|key| read(*key)),
            base_url: read("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            text_model: read("XHS_TEXT_MODEL").unwrap_or(defaults.text_model),
            image_model: read("XHS_IMAGE_MODEL").unwrap_or(defaults.image_model),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Startup presence check. A missing key only warns; requests fail later.
    pub fn warn_if_unconfigured(&self) -> bool {
        if self.has_credential() {
            tracing::info!(
                text_model = %self.text_model,
                image_model = %self.image_model,
                "Gemini credential found"
            );
            true
        } else {
            tracing::warn!(
                "GEMINI_API_KEY is not defined in the environment; generation requests will fail"
            );
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
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
        if std::env::var(key).is_err() {
            // SAFETY: called from `main` before the runtime or any other thread starts
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

/// `KEY=VALUE` pairs from an env file, skipping comments, blanks and empty values.
fn parse_env_lines(source: &str) -> Vec<(&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert!(!config.has_credential());
        assert!(!config.warn_if_unconfigured());
    }

    #[test]
    fn test_primary_key_wins_over_alias() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "alias"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));

        let config = AppConfig::from_lookup(lookup_from(&[("API_KEY", "alias")]));
        assert_eq!(config.api_key.as_deref(), Some("alias"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("XHS_TEXT_MODEL", ""),
        ]));
        assert!(config.api_key.is_none());
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
    }

    #[test]
    fn test_model_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("XHS_TEXT_MODEL", "gemini-2.5-pro"),
            ("XHS_IMAGE_MODEL", "imagen-custom"),
            ("GEMINI_BASE_URL", "http://localhost:8080/models"),
        ]));
        assert_eq!(config.text_model, "gemini-2.5-pro");
        assert_eq!(config.image_model, "imagen-custom");
        assert_eq!(config.base_url, "http://localhost:8080/models");
    }

    #[test]
    fn test_parse_env_lines() {
        let source = "# comment\n\nGEMINI_API_KEY=\nXHS_TEXT_MODEL = gemini-2.5-flash \nnot a pair\n";
        assert_eq!(
            parse_env_lines(source),
            vec![("XHS_TEXT_MODEL", "gemini-2.5-flash")]
        );
    }
}
