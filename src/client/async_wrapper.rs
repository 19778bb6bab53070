//! Async wrapper around synchronous SupabaseClient.
//!
//! This module provides an async interface to the synchronous SupabaseClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::SupabaseClient;
use crate::error::{SupabaseApiError, SupabaseApiResult};
use crate::metrics::Metrics;
use crate::models::{ContactSubmissionRecord, StoredSubmission};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for Supabase client operations.
#[async_trait]
pub trait AsyncSupabaseClient: Send + Sync {
    async fn insert_submissions(
        &self,
        table: &str,
        records: &[ContactSubmissionRecord],
    ) -> SupabaseApiResult<Vec<StoredSubmission>>;

    /// Metrics recorded by the underlying HTTP client.
    fn metrics(&self) -> Metrics;
}

/// Async wrapper around synchronous SupabaseClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncSupabaseClientImpl {
    client: Arc<SupabaseClient>,
}

impl AsyncSupabaseClientImpl {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncSupabaseClient for AsyncSupabaseClientImpl {
    async fn insert_submissions(
        &self,
        table: &str,
        records: &[ContactSubmissionRecord],
    ) -> SupabaseApiResult<Vec<StoredSubmission>> {
        let client = self.client.clone();
        let table = table.to_string();
        let records = records.to_vec();

        tokio::task::spawn_blocking(move || client.insert_submissions(&table, &records))
            .await
            .map_err(|e| SupabaseApiError::HttpError(format!("Task join error: {}", e)))?
    }

    fn metrics(&self) -> Metrics {
        self.client.metrics().clone()
    }
}
