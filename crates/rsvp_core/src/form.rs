//! Confirmation form state machine.
//!
//! The form owns the phone field, the guest list and the submission state.
//! Every mutation goes through a named operation; submission is split into
//! [`ConfirmationForm::begin_submit`] and [`ConfirmationForm::finish_submit`]
//! so an event loop can observe `Submitting` while the request is in flight.

use shared::{
    domain::ConfirmationType,
    protocol::{ConfirmationRequest, GuestEntry},
};
use tracing::{error, info, warn};

use crate::{
    client::SubmissionClient,
    config::SiteConfig,
    error::{FormError, SubmissionError},
    guest_list::GuestList,
    validation::{validate_fields, FieldErrors, FormField},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

/// Decorative side effect fired once per successful submission.
pub trait CelebrationHook: Send + Sync {
    fn celebrate(&self);
}

pub struct NoCelebration;

impl CelebrationHook for NoCelebration {
    fn celebrate(&self) {}
}

#[derive(Debug, Clone)]
pub struct ConfirmationForm {
    confirmation_type: ConfirmationType,
    phone: String,
    people: GuestList,
    errors: FieldErrors,
    state: SubmissionState,
    dirty: bool,
}

impl ConfirmationForm {
    pub fn new(confirmation_type: ConfirmationType) -> Self {
        Self {
            confirmation_type,
            phone: String::new(),
            people: GuestList::default(),
            errors: FieldErrors::default(),
            state: SubmissionState::Idle,
            dirty: false,
        }
    }

    pub fn for_site(config: &SiteConfig) -> Self {
        Self::new(config.confirmation_type)
    }

    pub fn confirmation_type(&self) -> ConfirmationType {
        self.confirmation_type
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn people(&self) -> &[GuestEntry] {
        self.people.entries()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.dirty && self.state == SubmissionState::Idle
    }

    /// Field edits are only accepted while the form is `Idle`.
    pub fn set_phone(&mut self, raw: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.phone = raw.into();
        self.errors.remove(FormField::Phone);
        self.dirty = true;
        Ok(())
    }

    pub fn append_person(&mut self) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.people.append();
        self.errors.clear_people();
        self.dirty = true;
        Ok(())
    }

    pub fn remove_person(&mut self, position: usize) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.people.remove_at(position)?;
        self.errors.clear_people();
        self.dirty = true;
        Ok(())
    }

    pub fn update_field(&mut self, field: FormField, text: impl Into<String>) -> Result<(), FormError> {
        match field {
            FormField::Phone => self.set_phone(text),
            FormField::Person(position) => {
                self.ensure_editable()?;
                self.people.update(position, text)?;
                self.errors.remove(field);
                self.dirty = true;
                Ok(())
            }
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_fields(&self.phone, self.people.entries())
    }

    /// Validates the current fields and, when they pass, moves to `Submitting`
    /// and returns the request to send.
    pub fn begin_submit(&mut self) -> Result<ConfirmationRequest, FormError> {
        self.ensure_editable()?;
        if !self.dirty {
            return Err(FormError::Pristine);
        }

        if let Err(errors) = self.validate() {
            warn!(
                confirmation_type = %self.confirmation_type,
                invalid_fields = errors.len(),
                "confirmation rejected by validation"
            );
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        }

        self.errors.clear();
        self.state = SubmissionState::Submitting;
        info!(
            confirmation_type = %self.confirmation_type,
            guests = self.people.len(),
            "submitting confirmation"
        );

        Ok(ConfirmationRequest {
            confirmation_type: self.confirmation_type,
            phone: self.phone.clone(),
            people: self.people.entries().to_vec(),
        })
    }

    /// Records the outcome of the in-flight submission. Fields are cleared on
    /// both paths.
    pub fn finish_submit<H>(
        &mut self,
        result: Result<(), SubmissionError>,
        celebration: &H,
    ) -> Result<SubmissionState, FormError>
    where
        H: CelebrationHook + ?Sized,
    {
        if self.state != SubmissionState::Submitting {
            return Err(FormError::NotSubmitting);
        }

        self.clear_fields();
        match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                info!(confirmation_type = %self.confirmation_type, "confirmation accepted");
                celebration.celebrate();
            }
            Err(err) => {
                self.state = SubmissionState::Failed;
                error!(
                    confirmation_type = %self.confirmation_type,
                    error = %err,
                    "confirmation submission failed"
                );
            }
        }
        Ok(self.state)
    }

    pub async fn submit<S, H>(
        &mut self,
        client: &S,
        celebration: &H,
    ) -> Result<SubmissionState, FormError>
    where
        S: SubmissionClient + ?Sized,
        H: CelebrationHook + ?Sized,
    {
        let request = self.begin_submit()?;
        let result = client.send_confirmation(&request).await;
        self.finish_submit(result, celebration)
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.state == SubmissionState::Submitting {
            return Err(FormError::SubmissionInFlight);
        }
        if self.state.is_terminal() {
            return Err(FormError::Closed(self.state));
        }
        Ok(())
    }

    fn clear_fields(&mut self) {
        self.phone.clear();
        self.people.reset();
        self.errors.clear();
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
