pub mod mock_submission_repository;

#[allow(unused_imports)]
pub use mock_submission_repository::{InsertGate, MockSubmissionRepository, Scripted};
