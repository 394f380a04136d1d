//! Data Service Client
//!
//! Bindings to the hosted forum data service, organized by concern.

mod forums;
mod query;

pub use query::*;

use crate::config::ServiceConfig;
use crate::error::FetchError;
use crate::models::ForumRecord;

/// Anything that can answer a forum query
#[allow(async_fn_in_trait)]
pub trait ForumSource {
    async fn fetch_forums(&self, query: &ForumQuery) -> Result<Vec<ForumRecord>, FetchError>;
}

/// REST client for the hosted service
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: ServiceConfig,
}

impl SupabaseClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
