//! EnglishOne Frontend Entry Point

mod app;
mod client;
mod components;
mod config;
mod context;
mod error;
mod hooks;
mod loader;
mod models;
mod pages;
mod placeholders;

use app::App;
use config::ServiceConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ServiceConfig::from_environment();
    wasm_logger::init(wasm_logger::Config::new(config.level()));
    log::info!("Starting EnglishOne UI against {}", config.url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
