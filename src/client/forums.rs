//! Forum Reads
//!
//! `GET /rest/v1/forums` over gloo-net, raced against the configured timeout.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

use super::{ForumQuery, ForumSource, SupabaseClient};
use crate::error::{FetchError, ServiceErrorBody};
use crate::models::ForumRecord;

impl ForumSource for SupabaseClient {
    async fn fetch_forums(&self, query: &ForumQuery) -> Result<Vec<ForumRecord>, FetchError> {
        let records = with_timeout(self.get_records(query), self.config().request_timeout_ms).await?;
        log::info!("GET {} - {} forums", query, records.len());
        Ok(records)
    }
}

impl SupabaseClient {
    /// Request and body decode, both inside the caller's timeout
    async fn get_records(&self, query: &ForumQuery) -> Result<Vec<ForumRecord>, FetchError> {
        let url = self.config().rest_url(&query.to_string());
        log::debug!("GET request to: {}", url);

        let response = self.send_get(&url).await?;

        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            log::warn!("GET {} - Non-OK response: {}", query, status);
            let body = response.json::<ServiceErrorBody>().await.ok();
            return Err(FetchError::from_service(status, &status_text, body));
        }

        log::trace!("GET {} - Response received, parsing JSON", query);
        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn send_get(&self, url: &str) -> Result<Response, FetchError> {
        let key = &self.config().anon_key;
        let mut request = Request::get(url).header("Accept", "application/json");
        if !key.is_empty() {
            request = request
                .header("apikey", key)
                .header("Authorization", &format!("Bearer {}", key));
        }
        request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

async fn with_timeout<T, F>(request: F, timeout_ms: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    race_timer(request, TimeoutFuture::new(timeout_ms), timeout_ms).await
}

/// First of `request` and `timer` to finish wins.
async fn race_timer<T, F, D>(request: F, timer: D, timeout_ms: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    pin_mut!(request);
    pin_mut!(timer);
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout(timeout_ms)),
    }
}
