use crate::error::SupabaseApiResult;
use crate::models::{ContactSubmissionRecord, StoredSubmission};
use async_trait::async_trait;

/// Repository for persisting contact submissions.
///
/// Provides abstraction over the backend the form writes to,
/// enabling different implementations (Supabase, mock).
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Insert a batch of submissions and return the stored rows.
    ///
    /// The form always sends a batch of exactly one record.
    async fn insert(
        &self,
        records: &[ContactSubmissionRecord],
    ) -> SupabaseApiResult<Vec<StoredSubmission>>;
}
