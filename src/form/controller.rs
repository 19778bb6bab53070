//! Form submission controller.

use super::state::{FormSnapshot, SubmissionStatus, SubmitOutcome};
use crate::domain::FormField;
use crate::error::SubmissionError;
use crate::models::ContactSubmission;
use crate::repositories::SubmissionRepository;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Owns the state of one contact form and submits it to a repository.
///
/// The state lock is only held for synchronous reads and writes, never across
/// the backend call. Nothing here prevents overlapping submits; the caller
/// disables submitting while [`is_submitting`](Self::is_submitting) is true.
pub struct FormController {
    repository: Arc<dyn SubmissionRepository>,
    state: Mutex<FormSnapshot>,
}

/// Clears the in-flight flag if a submission is dropped before it resolves.
struct InFlight<'a> {
    controller: &'a FormController,
    resolved: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            self.controller.state().is_submitting = false;
        }
    }
}

impl FormController {
    /// Create a controller with an empty, idle form.
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self {
            repository,
            state: Mutex::new(FormSnapshot::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set one field. The last submit status is kept.
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.state().values.set(field, value);
    }

    /// A copy of the current form state.
    pub fn snapshot(&self) -> FormSnapshot {
        self.state().clone()
    }

    /// Whether a submission is awaiting the backend.
    pub fn is_submitting(&self) -> bool {
        self.state().is_submitting
    }

    /// Submit the current values.
    ///
    /// On success the form is cleared and the status becomes `Success`. On
    /// failure the values are left as they are and the status becomes
    /// `Error`. The in-flight flag is cleared on every path. Failures are
    /// logged and returned inside the outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        let record = {
            let mut state = self.state();
            state.is_submitting = true;
            state.submit_status = SubmissionStatus::Idle;
            state.values.to_record()
        };
        let mut in_flight = InFlight {
            controller: self,
            resolved: false,
        };

        tracing::info!(
            has_phone = record.phone.is_some(),
            has_company = record.company.is_some(),
            "Submitting contact form"
        );

        let result = self
            .repository
            .insert(std::slice::from_ref(&record))
            .await;

        tracing::debug!("Backend response: {:?}", result);

        // The flag and the terminal status change under one lock.
        let mut state = self.state();
        state.is_submitting = false;
        in_flight.resolved = true;
        let outcome = match result {
            Ok(rows) => {
                state.submit_status = SubmissionStatus::Success;
                state.values = ContactSubmission::empty();
                tracing::info!(rows = rows.len(), "Contact form submitted");
                SubmitOutcome::Submitted(rows)
            }
            Err(e) => {
                let err = SubmissionError::from(e);
                state.submit_status = SubmissionStatus::Error;
                tracing::error!(kind = err.kind(), "Error submitting contact form: {}", err);
                SubmitOutcome::Failed(err)
            }
        };
        drop(state);
        outcome
    }
}
