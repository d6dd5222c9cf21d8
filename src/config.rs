//! App Configuration
//!
//! Built-in defaults, then build-time environment (`CATALOG_BACKEND_URL`,
//! `CATALOG_ANON_KEY`, `CATALOG_LOG_LEVEL`), then a `window.CATALOG_CONFIG`
//! object set by the hosting page. Later sources win.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::cache::DEFAULT_CACHE_KEY;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/320x220?text=No+Image";
const RUNTIME_CONFIG_GLOBAL: &str = "CATALOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid window.CATALOG_CONFIG: {0}")]
    Invalid(String),
}

/// Hosted backend endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub log_level: String,
    pub placeholder_image: String,
    pub cache_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            log_level: "info".to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            cache_key: DEFAULT_CACHE_KEY.to_string(),
        }
    }
}

/// Optional fields accepted from `window.CATALOG_CONFIG`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub anon_key: Option<String>,
    pub log_level: Option<String>,
    pub placeholder_image: Option<String>,
}

impl AppConfig {
    /// Defaults plus whatever was baked in at compile time
    pub fn from_build_env() -> Self {
        Self::default().apply(ConfigOverrides {
            backend_url: option_env!("CATALOG_BACKEND_URL").map(str::to_string),
            anon_key: option_env!("CATALOG_ANON_KEY").map(str::to_string),
            log_level: option_env!("CATALOG_LOG_LEVEL").map(str::to_string),
            placeholder_image: None,
        })
    }

    /// Full resolution including the runtime global
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_build_env();
        Ok(match runtime_overrides()? {
            Some(overrides) => config.apply(overrides),
            None => config,
        })
    }

    /// Overlay non-empty override fields
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = non_empty(overrides.backend_url) {
            self.backend.url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = non_empty(overrides.anon_key) {
            self.backend.anon_key = key;
        }
        if let Some(level) = non_empty(overrides.log_level) {
            self.log_level = level;
        }
        if let Some(image) = non_empty(overrides.placeholder_image) {
            self.placeholder_image = image;
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn runtime_overrides() -> Result<Option<ConfigOverrides>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&JsValue::from(window), &JsValue::from_str(RUNTIME_CONFIG_GLOBAL))
        .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.backend.is_configured());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cache_key, "catBookings");
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_apply_overrides() {
        let config = AppConfig::default().apply(ConfigOverrides {
            backend_url: Some("https://demo.supabase.co/".to_string()),
            anon_key: Some("anon".to_string()),
            log_level: Some("debug".to_string()),
            placeholder_image: None,
        });
        assert_eq!(config.backend.url, "https://demo.supabase.co");
        assert_eq!(config.backend.anon_key, "anon");
        assert!(config.backend.is_configured());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let base = AppConfig::default().apply(ConfigOverrides {
            backend_url: Some("https://a.example".to_string()),
            ..Default::default()
        });
        let config = base.clone().apply(ConfigOverrides {
            backend_url: Some("   ".to_string()),
            log_level: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(config, base);
    }

    #[test]
    fn test_overrides_deserialize_camel_case() {
        let json = r#"{"backendUrl":"https://x.example","anonKey":"k"}"#;
        let overrides: ConfigOverrides = serde_json::from_str(json).unwrap();
        assert_eq!(overrides.backend_url.as_deref(), Some("https://x.example"));
        assert_eq!(overrides.anon_key.as_deref(), Some("k"));
        assert_eq!(overrides.log_level, None);
    }
}
