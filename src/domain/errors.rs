//! Domain validation errors.

use super::field::FormField;
use std::fmt;

/// Errors that can occur while checking the form against its input constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    MissingField(FormField),

    /// The email field does not look like an email address.
    InvalidEmail(String),

    /// The field name does not belong to the contact form.
    UnknownField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::UnknownField(name) => write!(f, "Unknown form field: {}", name),
        }
    }
}

impl std::error::Error for ValidationError {}
