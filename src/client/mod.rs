//! HTTP client for the Supabase REST (PostgREST) API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication headers and
//! error mapping for table inserts.

mod async_wrapper;
pub use async_wrapper::{AsyncSupabaseClient, AsyncSupabaseClientImpl};

use crate::config::Config;
use crate::error::{SupabaseApiError, SupabaseApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactSubmissionRecord, StoredSubmission};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Error body returned by PostgREST for rejected requests.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// HTTP client for a Supabase project's REST endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SupabaseClient {
    /// Project URL, e.g. https://xyz.supabase.co
    base_url: String,

    /// Anon key, sent both as `apikey` and as the bearer token
    anon_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SupabaseClient {
    /// Create a new SupabaseClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a SupabaseClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, anon_key: String) -> Self {
        Self::build(base_url, anon_key, Duration::from_secs(10))
    }

    fn build(base_url: String, anon_key: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            anon_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the REST URL of a table.
    fn table_url(&self, table: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/rest/v1/{}", base, urlencoding::encode(table.trim()))
    }

    /// Execute an authenticated POST with a JSON body.
    fn post(
        &self,
        url: &str,
        query: &[(&str, &str)],
        prefer: &str,
        body: &serde_json::Value,
    ) -> Result<ureq::Response, SupabaseApiError> {
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let mut request = self
            .agent
            .post(url)
            .set("apikey", &self.anon_key)
            .set("Authorization", &format!("Bearer {}", self.anon_key))
            .set("Content-Type", "application/json")
            .set("Prefer", prefer);
        for (key, value) in query {
            request = request.query(key, value);
        }

        let result = request.send_json(body).map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a SupabaseApiError.
    fn map_error(&self, error: ureq::Error) -> SupabaseApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = Self::error_message(&body);

                match code {
                    401 | 403 => SupabaseApiError::Unauthorized(code),
                    409 => SupabaseApiError::Conflict(message),
                    429 => SupabaseApiError::RateLimitExceeded,
                    _ => SupabaseApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SupabaseApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SupabaseApiError::Timeout
                } else {
                    SupabaseApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Pull a readable message out of a PostgREST error body, falling back to the raw body.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<PostgrestErrorBody>(body) {
            Ok(parsed) => {
                let mut message = match parsed.code {
                    Some(code) => format!("{} ({})", parsed.message, code),
                    None => parsed.message,
                };
                if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
                    message.push_str(": ");
                    message.push_str(&details);
                }
                message
            }
            Err(_) => body.to_string(),
        }
    }

    // ========================= Submission Operations =========================

    /// Insert contact submissions into `table` and return the stored rows.
    ///
    /// Sends `Prefer: return=representation` with `select=*` so the response
    /// carries the inserted rows including generated columns.
    pub fn insert_submissions(
        &self,
        table: &str,
        records: &[ContactSubmissionRecord],
    ) -> SupabaseApiResult<Vec<StoredSubmission>> {
        if table.trim().is_empty() {
            return Err(SupabaseApiError::InvalidRequest(
                "Table name cannot be empty".to_string(),
            ));
        }

        tracing::info!("Inserting {} row(s) into {}", records.len(), table);

        let body = serde_json::to_value(records).map_err(SupabaseApiError::JsonError)?;
        let url = self.table_url(table);
        let response = self.post(&url, &[("select", "*")], "return=representation", &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| SupabaseApiError::HttpError(e.to_string()))?;

        tracing::debug!("Insert response: {}", response_body);

        let rows: Vec<StoredSubmission> = if response_body.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&response_body).map_err(SupabaseApiError::JsonError)?
        };

        self.metrics.record_submissions_inserted(rows.len());
        Ok(rows)
    }
}
