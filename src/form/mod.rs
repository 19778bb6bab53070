//! The contact form's submission controller and the state it exposes.
//!
//! - **state**: field values, the in-flight flag and the last submit status
//! - **controller**: applies field updates and runs a submission against a
//!   [`SubmissionRepository`](crate::repositories::SubmissionRepository)

mod controller;
mod state;

pub use controller::FormController;
pub use state::{FormSnapshot, SubmissionStatus, SubmitOutcome};
