//! Error types for the contact form server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the Supabase REST API.
#[derive(Error, Debug)]
pub enum SupabaseApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The anon key was rejected or row level security denied the insert
    #[error("Authentication failed (status {0})")]
    Unauthorized(u16),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// A unique or foreign key constraint rejected the row
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Why a contact form submission did not go through.
///
/// The page shows a single generic notice for every failure; this type keeps
/// the distinction for operators and for callers that want it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The form did not satisfy its input constraints; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The request never produced a usable response.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The backend answered and refused the row.
    #[error("Backend rejected submission: {message}")]
    Rejected { status: Option<u16>, message: String },

    /// A submission for this form is still in flight.
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

impl SubmissionError {
    /// Short machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
            Self::Rejected { .. } => "rejected",
            Self::AlreadySubmitting => "already_submitting",
        }
    }
}

impl From<SupabaseApiError> for SubmissionError {
    fn from(err: SupabaseApiError) -> Self {
        match err {
            SupabaseApiError::HttpError(_)
            | SupabaseApiError::Timeout
            | SupabaseApiError::JsonError(_) => Self::Transport(err.to_string()),
            SupabaseApiError::ApiError { status, .. } => Self::Rejected {
                status: Some(status),
                message: err.to_string(),
            },
            SupabaseApiError::Unauthorized(status) => Self::Rejected {
                status: Some(status),
                message: err.to_string(),
            },
            SupabaseApiError::RateLimitExceeded => Self::Rejected {
                status: Some(429),
                message: err.to_string(),
            },
            SupabaseApiError::Conflict(_) => Self::Rejected {
                status: Some(409),
                message: err.to_string(),
            },
            SupabaseApiError::InvalidRequest(_) => Self::Rejected {
                status: None,
                message: err.to_string(),
            },
        }
    }
}

/// Convenience type alias for Results with SupabaseApiError
pub type SupabaseApiResult<T> = Result<T, SupabaseApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;
