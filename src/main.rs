//! Cat Catalog Frontend Entry Point

mod api;
mod app;
mod booking;
mod breeds;
mod cache;
mod components;
mod config;
mod context;
mod models;
mod search;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::from_build_env(), Some(e)),
    };

    if let Err(e) = console_logger::init("cat-catalog", console_logger::parse_level(&config.log_level)) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        tracing::warn!("{}; using build-time configuration", e);
    }
    if !config.backend.is_configured() {
        tracing::warn!("backend URL not configured, the cat list will not load");
    }

    mount_to_body(move || view! { <App config=config /> });
}
