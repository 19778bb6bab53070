//! Form state and submission status.

use crate::error::SubmissionError;
use crate::models::{ContactSubmission, StoredSubmission};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Text the form shows for this status, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some("Sending..."),
            Self::Success => Some("Thank you! We'll be in touch soon."),
            Self::Error => Some("Something went wrong. Please try again."),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the rendering surface needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormSnapshot {
    /// Current field values
    pub values: ContactSubmission,

    /// True strictly while a submission is awaiting the backend
    pub is_submitting: bool,

    /// Result of the last finished submission; `Idle` once a new one starts
    pub submit_status: SubmissionStatus,
}

impl FormSnapshot {
    /// Combined status: `Submitting` while in flight, otherwise the last result.
    pub fn status(&self) -> SubmissionStatus {
        if self.is_submitting {
            SubmissionStatus::Submitting
        } else {
            self.submit_status
        }
    }
}

/// Result of one call to [`FormController::submit`](super::FormController::submit).
///
/// Failures are carried as data; submitting never returns an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend stored the row; the form has been cleared.
    Submitted(Vec<StoredSubmission>),

    /// The backend call failed; the form keeps its values.
    Failed(SubmissionError),
}

impl SubmitOutcome {
    /// The terminal status this outcome leaves the form in.
    pub fn status(&self) -> SubmissionStatus {
        match self {
            Self::Submitted(_) => SubmissionStatus::Success,
            Self::Failed(_) => SubmissionStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            Self::Submitted(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}
