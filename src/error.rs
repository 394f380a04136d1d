//! Fetch Errors
//!
//! The single failure kind a forum fetch can end in.

use serde::Deserialize;
use thiserror::Error;

/// A forum fetch that did not produce records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Service {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// The request never reached the service or the connection dropped.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not a list of forum records.
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

/// PostgREST error payload
#[derive(Debug, Default, Deserialize)]
pub struct ServiceErrorBody {
    pub message: Option<String>,
    pub code: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl FetchError {
    /// Build a service error from the status and whatever body came back.
    pub fn from_service(status: u16, status_text: &str, body: Option<ServiceErrorBody>) -> Self {
        let body = body.unwrap_or_default();
        let mut message = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status_text.to_string());
        if let Some(details) = body.details.filter(|d| !d.is_empty()) {
            message.push_str(&format!(" ({})", details));
        }
        if let Some(hint) = body.hint.filter(|h| !h.is_empty()) {
            message.push_str(&format!(" hint: {}", hint));
        }
        FetchError::Service {
            status,
            code: body.code,
            message,
        }
    }
}
