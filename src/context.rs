//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::client::SupabaseClient;
use crate::config::ServiceConfig;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Client for the forum data service
    pub client: SupabaseClient,
}

impl AppContext {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: SupabaseClient::new(config),
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
