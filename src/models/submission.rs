//! Contact submission models.

use crate::domain::{EmailAddress, FormField};
use serde::{Deserialize, Deserializer, Serialize};

/// The values currently typed into the contact form.
///
/// Every field is plain text; an empty string means the input is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactSubmission {
    /// A blank form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Current value of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Build the record sent to the backend.
    ///
    /// Empty optional fields become `None` so the stored row holds `null`
    /// instead of an empty string. The email is sent as the email input would
    /// hold it; other values are passed through as typed.
    pub fn to_record(&self) -> ContactSubmissionRecord {
        ContactSubmissionRecord {
            name: self.name.clone(),
            email: EmailAddress::sanitize(&self.email),
            phone: non_empty(&self.phone),
            company: non_empty(&self.company),
            message: self.message.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A row of the `contact_submissions` table as sent on insert.
///
/// All five keys are always serialized; absent optional values are `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
}

/// Accept a row id that the table stores either as text (uuid) or as a number.
fn deserialize_row_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// A row returned by the backend after a successful insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSubmission {
    /// Primary key assigned by the table
    #[serde(default, deserialize_with = "deserialize_row_id")]
    pub id: Option<String>,

    /// Insert timestamp assigned by the table default
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub record: ContactSubmissionRecord,
}
