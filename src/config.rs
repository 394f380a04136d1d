//! Service Configuration
//!
//! Where the forum data service lives and how the app logs.
//! Defaults are baked in at build time; the hosting page may override
//! them through `window.__ENGLISHONE_CONFIG__`.

use log::Level;
use serde::Deserialize;
use std::str::FromStr;
use wasm_bindgen::JsValue;

const DEFAULT_URL: &str = "http://localhost:54321";
const DEFAULT_TIMEOUT_MS: u32 = 30_000;
const WINDOW_CONFIG_KEY: &str = "__ENGLISHONE_CONFIG__";
/// `setTimeout` takes a signed 32-bit delay
const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

/// Connection settings for the hosted data service
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub url: String,
    pub anon_key: String,
    pub request_timeout_ms: u32,
    pub log_level: String,
}

/// Fields the hosting page may override at runtime
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub request_timeout_ms: Option<u32>,
    pub log_level: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: option_env!("ENGLISHONE_SUPABASE_URL")
                .unwrap_or(DEFAULT_URL)
                .to_string(),
            anon_key: option_env!("ENGLISHONE_SUPABASE_ANON_KEY")
                .unwrap_or_default()
                .to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Build-time defaults, then any overrides the page provides.
    pub fn from_environment() -> Self {
        let mut config = Self::default();
        if let Some(overrides) = read_window_overrides() {
            config.apply(overrides);
        }
        config
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.url {
            self.url = url;
        }
        if let Some(key) = overrides.anon_key {
            self.anon_key = key;
        }
        if let Some(timeout) = overrides.request_timeout_ms {
            self.request_timeout_ms = timeout.min(MAX_TIMEOUT_MS);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    /// Log level, `Info` when the configured name is not recognised
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::Info)
    }

    /// REST endpoint for a table query, e.g. `{url}/rest/v1/forums?select=*`
    pub fn rest_url(&self, path_and_query: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), path_and_query)
    }
}

fn read_window_overrides() -> Option<ConfigOverrides> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            // Logger is not up yet at this point
            web_sys::console::warn_1(&format!("Ignoring {}: {}", WINDOW_CONFIG_KEY, e).into());
            None
        }
    }
}
