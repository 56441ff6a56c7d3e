// Dr. Mike Medical Practice landing page — Leptos 0.8 CSR edition

use leptos::prelude::*;
use practice_core::config::SiteConfig;
use practice_landing::{App, auth};

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_err) = SiteConfig::load_embedded(SITE_TOML);
    init_logging(&config);
    if let Some(e) = config_err {
        log::warn!("[site] {e}; using built-in defaults");
    }

    let identity = auth::load_session_identity();
    log::info!(
        "[site] {} landing page mounting (signed in: {})",
        config.brand_name,
        identity.is_authenticated
    );

    leptos::mount::mount_to_body(move || {
        view! { <App config=config.clone() identity=identity.clone() /> }
    });
}

fn init_logging(config: &SiteConfig) {
    let level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            web_sys::console::warn_1(&format!("[site] {e}; logging at info").into());
            log::Level::Info
        }
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("[site] logger already set: {e}").into());
    }
}
