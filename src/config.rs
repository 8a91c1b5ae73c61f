//! Runtime Configuration
//!
//! Build-time defaults from `catalog_core::CatalogConfig`, optionally
//! overridden by a JSON block embedded in the host page:
//!
//! ```html
//! <script type="application/json" id="catalog-config">
//!   { "api_base_url": "http://localhost:8080/coffee", "confirm_style": "dialog" }
//! </script>
//! ```

use catalog_core::{CatalogConfig, CatalogError};
use leptos::prelude::document;

pub const CONFIG_ELEMENT_ID: &str = "catalog-config";

fn inline_config() -> Option<String> {
    document()
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Runs before logging is installed, so a rejected page block is handed
/// back for the caller to report.
pub fn load() -> (CatalogConfig, Option<CatalogError>) {
    let config = CatalogConfig::from_build_env();
    let Some(json) = inline_config() else {
        return (config, None);
    };
    match config.clone().merge_json(&json) {
        Ok(merged) => (merged, None),
        Err(e) => (config, Some(e)),
    }
}
