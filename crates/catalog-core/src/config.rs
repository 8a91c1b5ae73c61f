//! Catalog Configuration
//!
//! Layered: defaults, then build-time environment, then an optional JSON
//! document supplied by the host page.

use serde::{Deserialize, Serialize};

use crate::domain::{CatalogError, CatalogResult};

/// Remote collection used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://api.sampleapis.com/coffee/hot";

const DEFAULT_TOAST_TTL_MS: u32 = 3000;

/// Which confirmation provider gates deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmStyle {
    /// Blocking `window.confirm`
    #[default]
    Native,
    /// In-page confirmation dialog
    Dialog,
}

impl ConfirmStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Some(ConfirmStyle::Native),
            "dialog" | "modal" => Some(ConfirmStyle::Dialog),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the REST collection
    pub api_base_url: String,
    pub confirm_style: ConfirmStyle,
    /// How long a toast stays up
    pub toast_ttl_ms: u32,
    /// `log` level name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            confirm_style: ConfirmStyle::default(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `COFFEE_CATALOG_API_URL` and
    /// `COFFEE_CATALOG_CONFIRM` as seen at compile time
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("COFFEE_CATALOG_API_URL"),
            option_env!("COFFEE_CATALOG_CONFIRM"),
        )
    }

    /// Apply optional overrides; blank or unknown values are ignored
    pub fn with_overrides(mut self, api_url: Option<&str>, confirm: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        if let Some(style) = confirm.and_then(ConfirmStyle::parse) {
            self.confirm_style = style;
        }
        self
    }

    /// Merge a JSON document over this config. Absent keys keep their
    /// current value.
    pub fn merge_json(self, json: &str) -> CatalogResult<Self> {
        let mut base =
            serde_json::to_value(&self).map_err(|e| CatalogError::Config(e.to_string()))?;
        let overlay: serde_json::Value =
            serde_json::from_str(json).map_err(|e| CatalogError::Config(e.to_string()))?;
        let serde_json::Value::Object(fields) = overlay else {
            return Err(CatalogError::Config("expected a JSON object".to_string()));
        };
        if let serde_json::Value::Object(target) = &mut base {
            target.extend(fields);
        }
        serde_json::from_value(base).map_err(|e| CatalogError::Config(e.to_string()))
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.confirm_style, ConfirmStyle::Native);
        assert_eq!(config.toast_ttl_ms, 3000);
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::default()
            .with_overrides(Some(" http://localhost:8080/coffee "), Some("Dialog"));
        assert_eq!(config.api_base_url, "http://localhost:8080/coffee");
        assert_eq!(config.confirm_style, ConfirmStyle::Dialog);

        let config = CatalogConfig::default().with_overrides(Some("  "), Some("popup"));
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_merge_json_keeps_absent_keys() {
        let config = CatalogConfig::default()
            .with_overrides(Some("http://build-time"), None)
            .merge_json(r#"{"confirm_style":"dialog","toast_ttl_ms":500}"#)
            .unwrap();
        assert_eq!(config.api_base_url, "http://build-time");
        assert_eq!(config.confirm_style, ConfirmStyle::Dialog);
        assert_eq!(config.toast_ttl_ms, 500);
    }

    #[test]
    fn test_merge_json_rejects_garbage() {
        assert!(matches!(
            CatalogConfig::default().merge_json("[1,2]"),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(CatalogConfig::default().merge_json("{"), Err(CatalogError::Config(_))));
        assert!(matches!(
            CatalogConfig::default().merge_json(r#"{"confirm_style":"popup"}"#),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = CatalogConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.log_level(), tracing::Level::INFO);
        let config = CatalogConfig { log_level: "debug".into(), ..Default::default() };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }
}
