//! Contact form service layer.
//!
//! Plays the part of the browser form: required inputs, the email input's
//! format check, and the submit button that is disabled while sending.

use crate::domain::{EmailAddress, FormField, ValidationError};
use crate::error::{SubmissionError, SubmissionResult};
use crate::form::{FormController, FormSnapshot, SubmitOutcome};
use crate::models::{AgencyProfile, ContactSubmission};
use async_trait::async_trait;
use std::sync::Arc;

/// Contact form service trait for the interaction surface.
#[async_trait]
pub trait ContactFormService: Send + Sync {
    /// Current form state.
    fn state(&self) -> FormSnapshot;

    /// Set one field by name.
    fn update_field(&self, field_name: &str, value: String) -> SubmissionResult<FormSnapshot>;

    /// Set several fields, in order.
    fn fill(&self, fields: Vec<(FormField, String)>) -> FormSnapshot;

    /// Submit the form if its constraints hold and no submission is in flight.
    ///
    /// `Err` means the form was not submitted at all; backend failures come
    /// back as `Ok(SubmitOutcome::Failed(..))`.
    async fn submit(&self) -> SubmissionResult<SubmitOutcome>;

    /// Details shown next to the form.
    fn agency_profile(&self) -> AgencyProfile;
}

/// Default implementation of ContactFormService.
pub struct ContactFormServiceImpl {
    controller: Arc<FormController>,
    profile: AgencyProfile,
}

/// Validation helper functions.
impl ContactFormServiceImpl {
    /// Check required fields, then the email shape.
    fn validate(values: &ContactSubmission) -> Result<(), ValidationError> {
        if let Some(missing) = FormField::ALL
            .iter()
            .find(|f| f.is_required() && values.get(**f).trim().is_empty())
        {
            return Err(ValidationError::MissingField(*missing));
        }

        EmailAddress::new(values.email.as_str())?;
        Ok(())
    }
}

impl ContactFormServiceImpl {
    /// Create a new contact form service.
    pub fn new(controller: Arc<FormController>) -> Self {
        Self {
            controller,
            profile: AgencyProfile::default(),
        }
    }
}

#[async_trait]
impl ContactFormService for ContactFormServiceImpl {
    fn state(&self) -> FormSnapshot {
        self.controller.snapshot()
    }

    fn update_field(&self, field_name: &str, value: String) -> SubmissionResult<FormSnapshot> {
        let field: FormField = field_name.parse()?;
        self.controller.update_field(field, value);
        Ok(self.controller.snapshot())
    }

    fn fill(&self, fields: Vec<(FormField, String)>) -> FormSnapshot {
        for (field, value) in fields {
            self.controller.update_field(field, value);
        }
        self.controller.snapshot()
    }

    async fn submit(&self) -> SubmissionResult<SubmitOutcome> {
        // No await between this check and the controller raising its flag.
        if self.controller.is_submitting() {
            tracing::warn!("Submit ignored: a submission is already in progress");
            return Err(SubmissionError::AlreadySubmitting);
        }

        let snapshot = self.controller.snapshot();
        if let Err(e) = Self::validate(&snapshot.values) {
            tracing::info!("Submit blocked by form constraints: {}", e);
            return Err(e.into());
        }

        Ok(self.controller.submit().await)
    }

    fn agency_profile(&self) -> AgencyProfile {
        self.profile.clone()
    }
}
