use async_trait::async_trait;
use contact_form_mcp_server::error::{SupabaseApiError, SupabaseApiResult};
use contact_form_mcp_server::models::{ContactSubmissionRecord, StoredSubmission};
use contact_form_mcp_server::repositories::SubmissionRepository;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Result a single insert call is scripted to produce.
#[allow(dead_code)]
#[derive(Clone, Copy)]
pub enum Scripted {
    Succeed,
    Fail(fn() -> SupabaseApiError),
}

/// Holds inserts in flight until the test releases them.
///
/// Every call parks on its own release, so overlapping calls can be resolved
/// in any order.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct InsertGate {
    entered: Arc<Notify>,
    calls: Arc<Mutex<Vec<Arc<Notify>>>>,
    next_release: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl InsertGate {
    /// Wait until an insert has started and is parked on the gate.
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    /// Let the oldest parked insert not yet released finish.
    pub fn release(&self) {
        let call = {
            let mut next = self.next_release.lock().unwrap();
            let call = *next;
            *next += 1;
            call
        };
        self.release_call(call);
    }

    /// Let the insert made as call number `call` (0-based) finish.
    pub fn release_call(&self, call: usize) {
        self.calls.lock().unwrap()[call].notify_one();
    }

    fn park(&self) -> Arc<Notify> {
        let release = Arc::new(Notify::new());
        self.calls.lock().unwrap().push(release.clone());
        self.entered.notify_one();
        release
    }
}

/// Mock submission repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSubmissionRepository {
    batches: Arc<Mutex<Vec<Vec<ContactSubmissionRecord>>>>,
    failure: Arc<Mutex<Option<fn() -> SupabaseApiError>>>,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    gate: Option<InsertGate>,
}

#[allow(dead_code)]
impl MockSubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose inserts wait on the returned gate.
    pub fn gated() -> (Self, InsertGate) {
        let gate = InsertGate::default();
        let repo = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (repo, gate)
    }

    /// Make every following insert fail with the error `make` builds.
    pub fn fail_with(&self, make: fn() -> SupabaseApiError) {
        *self.failure.lock().unwrap() = Some(make);
    }

    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Fix the results of the next calls, in call order.
    ///
    /// A scripted result is bound when the call starts, whatever order the
    /// calls resolve in. Calls past the script fall back to `fail_with`.
    pub fn script(&self, outcomes: impl IntoIterator<Item = Scripted>) {
        self.script.lock().unwrap().extend(outcomes);
    }

    pub fn insert_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    /// Every batch passed to `insert`, in call order.
    pub fn batches(&self) -> Vec<Vec<ContactSubmissionRecord>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionRepository for MockSubmissionRepository {
    async fn insert(
        &self,
        records: &[ContactSubmissionRecord],
    ) -> SupabaseApiResult<Vec<StoredSubmission>> {
        let batch = {
            let mut batches = self.batches.lock().unwrap();
            batches.push(records.to_vec());
            batches.len()
        };
        let scripted = self.script.lock().unwrap().pop_front();

        if let Some(gate) = &self.gate {
            let release = gate.park();
            release.notified().await;
        }

        let failure = match scripted {
            Some(Scripted::Succeed) => None,
            Some(Scripted::Fail(make)) => Some(make),
            None => *self.failure.lock().unwrap(),
        };
        if let Some(make) = failure {
            return Err(make());
        }

        Ok(records
            .iter()
            .enumerate()
            .map(|(i, record)| StoredSubmission {
                id: Some(format!("{}-{}", batch, i)),
                created_at: Some("2026-10-17T09:00:00+00:00".to_string()),
                record: record.clone(),
            })
            .collect())
    }
}
