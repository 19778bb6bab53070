//! Data models for the contact form.
//!
//! This module contains the form's field set, the normalized record sent to
//! the backend, the rows the backend echoes back, and the agency profile
//! shown beside the form.

pub mod agency;
pub mod submission;

pub use agency::AgencyProfile;
pub use submission::{ContactSubmission, ContactSubmissionRecord, StoredSubmission};
