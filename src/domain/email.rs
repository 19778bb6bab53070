//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The shape browsers enforce for `<input type="email">`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// Validation mirrors what an email input accepts: the value is sanitized the
/// way the input sanitizes it, then must match the HTML email shape. That shape
/// allows a dotless domain such as `admin@localhost`.
///
/// # Example
///
/// ```
/// use contact_form_mcp_server::domain::EmailAddress;
///
/// let email = EmailAddress::new(" jane@x.com ").unwrap();
/// assert_eq!(email.as_str(), "jane@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let sanitized = Self::sanitize(&email);

        if !EMAIL_REGEX.is_match(&sanitized) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(sanitized))
    }

    /// The value an email input holds for `raw`: line breaks removed, then
    /// leading and trailing ASCII whitespace stripped.
    pub fn sanitize(raw: &str) -> String {
        raw.chars()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .collect::<String>()
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .to_string()
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
