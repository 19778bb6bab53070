use crate::client::AsyncSupabaseClient;
use crate::error::SupabaseApiResult;
use crate::models::{ContactSubmissionRecord, StoredSubmission};
use crate::repositories::traits::SubmissionRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Submission repository backed by a Supabase table.
///
/// This repository delegates to the AsyncSupabaseClient, binding it to
/// the one table the contact form writes to.
pub struct SupabaseSubmissionRepository {
    client: Arc<dyn AsyncSupabaseClient>,
    table: String,
}

impl SupabaseSubmissionRepository {
    /// Create a new repository writing to `table`.
    pub fn new(client: Arc<dyn AsyncSupabaseClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl SubmissionRepository for SupabaseSubmissionRepository {
    async fn insert(
        &self,
        records: &[ContactSubmissionRecord],
    ) -> SupabaseApiResult<Vec<StoredSubmission>> {
        self.client.insert_submissions(&self.table, records).await
    }
}
