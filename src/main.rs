//! Coffee Catalog Frontend Entry Point

mod app;
mod components;
mod config;
mod confirm;
mod context;
mod toast;

use app::App;
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = config::load();
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level())
            .build(),
    );
    if let Some(e) = rejected {
        tracing::warn!("[CONFIG] Ignoring #{}: {}", config::CONFIG_ELEMENT_ID, e);
    }
    tracing::info!(
        "[APP] Catalog at {}, confirm via {:?}",
        config.api_base_url,
        config.confirm_style
    );

    mount_to_body(move || view! { <App config=config /> });
}
