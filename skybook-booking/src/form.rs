use crate::models::{BookingRequest, Passenger};
use crate::validation::validate_request;
use skybook_core::validation::ValidationErrors;

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Free-form mutation of contact and passenger fields.
    Editing,
    /// A validated request is in flight.
    Submitting,
    /// The booking was confirmed; the form is finished.
    Success,
}

/// The booking form's accumulated state: contact fields, an ordered passenger
/// sequence (entry order is display order), and the errors from the last
/// failed submit attempt.
///
/// Lifecycle: `Editing → Submitting → Success`, with a failed validation
/// dropping back to `Editing` and attaching field errors.
pub struct BookingForm {
    contact_email: String,
    contact_phone: String,
    passengers: Vec<Passenger>,
    errors: ValidationErrors,
    status: FormStatus,
}

impl BookingForm {
    /// A fresh form pre-populated with one empty adult passenger.
    pub fn new() -> Self {
        Self {
            contact_email: String::new(),
            contact_phone: String::new(),
            passengers: vec![Passenger::empty()],
            errors: ValidationErrors::new(),
            status: FormStatus::Editing,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn set_contact_email(&mut self, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editing("edit")?;
        self.contact_email = value.into();
        Ok(())
    }

    pub fn set_contact_phone(&mut self, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editing("edit")?;
        self.contact_phone = value.into();
        Ok(())
    }

    /// Append a blank passenger. No surface exposes this yet, but the
    /// passenger sequence supports arbitrary length.
    pub fn add_passenger(&mut self) -> Result<(), FormError> {
        self.ensure_editing("edit")?;
        self.passengers.push(Passenger::empty());
        Ok(())
    }

    /// Mutable access to one passenger entry for field-by-field edits.
    pub fn passenger_mut(&mut self, index: usize) -> Result<&mut Passenger, FormError> {
        self.ensure_editing("edit")?;
        let len = self.passengers.len();
        self.passengers
            .get_mut(index)
            .ok_or(FormError::UnknownPassenger { index, len })
    }

    /// Attempt submission. On validation failure the form stays in `Editing`
    /// with the field errors attached and nothing is submitted; on success it
    /// moves to `Submitting` and hands back the request snapshot.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, FormError> {
        self.ensure_editing("submit")?;

        let request = BookingRequest {
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            passengers: self.passengers.clone(),
        };

        match validate_request(&request) {
            Ok(()) => {
                self.errors = ValidationErrors::new();
                self.status = FormStatus::Submitting;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(FormError::Validation(errors))
            }
        }
    }

    /// The in-flight request was confirmed.
    pub fn complete(&mut self) -> Result<(), FormError> {
        if self.status != FormStatus::Submitting {
            return Err(FormError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: "Success".to_string(),
            });
        }
        self.status = FormStatus::Success;
        Ok(())
    }

    fn ensure_editing(&self, action: &str) -> Result<(), FormError> {
        if self.status != FormStatus::Editing {
            return Err(FormError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: action.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("No passenger at index {index} (form has {len})")]
    UnknownPassenger { index: usize, len: usize },
}
