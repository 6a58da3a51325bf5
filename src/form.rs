//! Form controller: field state, validation and the submission lifecycle.
//!
//! The controller is a plain value with no knowledge of the DOM. A submission
//! is split into two phases so a UI host can release its borrow while the
//! request is in flight:
//!
//! 1. [`FormController::begin_submit`] gates re-entry, validates and returns
//!    the body to send.
//! 2. [`FormController::finish_submit`] applies the delivery result.
//!
//! [`FormController::submit_with`] runs both phases around a [`LeadSink`].

use crate::config::GENERIC_ERROR_MESSAGE;
use crate::error::{SubmissionError, SubmitError};
use crate::lead::{ContactSubmission, Coordinate, Field, WebhookPayload};
use crate::utils::bill_looks_numeric;
use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use log::{debug, error, info, warn};

/// Which view the page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Success,
    /// Form stays editable with an inline message.
    Error(String),
}

/// Destination for a validated lead.
pub trait LeadSink {
    /// Deliver one payload. Resolves once the request has completed or failed.
    fn deliver(
        &self,
        payload: WebhookPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmissionError>>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    submission: ContactSubmission,
    submitting: bool,
    outcome: SubmissionOutcome,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Inline message to show above the form, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            SubmissionOutcome::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.submission.set(field, value.into());
    }

    /// Update the field whose input carries `name`. Returns `false` for
    /// names that are not part of the form.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<Field>() {
            Ok(field) => {
                self.set_field(field, value);
                true
            }
            Err(e) => {
                warn!("Ignoring input: {}", e);
                false
            }
        }
    }

    /// Replace the selected location. Only the latest click is kept.
    pub fn select_coordinate(&mut self, coordinate: Coordinate) {
        self.submission.coordinate = Some(coordinate);
    }

    /// First phase of a submit.
    ///
    /// Leaves the controller in the submitting state only when a payload is
    /// returned; every other path exits it before returning.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<WebhookPayload, SubmitError> {
        if self.submitting {
            debug!("Submit ignored: request already in flight");
            return Err(SubmitError::Busy);
        }

        self.outcome = SubmissionOutcome::Idle;
        self.submitting = true;

        match self.submission.to_payload(now) {
            Ok(payload) => {
                if !bill_looks_numeric(&payload.facture_mensuelle_electricite) {
                    warn!(
                        "Monthly bill '{}' is not a plain amount, sending as entered",
                        payload.facture_mensuelle_electricite
                    );
                }
                Ok(payload)
            }
            Err(e) => {
                debug!("Submit rejected: {:?}", e);
                self.submitting = false;
                self.outcome = SubmissionOutcome::Error(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Second phase of a submit. Always leaves the submitting state.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) {
        match result {
            Ok(()) => {
                info!("Lead delivered");
                self.submission = ContactSubmission::default();
                self.outcome = SubmissionOutcome::Success;
            }
            Err(e) => {
                error!("Lead delivery failed: {}", e);
                self.outcome = SubmissionOutcome::Error(GENERIC_ERROR_MESSAGE.to_string());
            }
        }
        self.submitting = false;
    }

    /// Leave the success view with an empty form.
    pub fn start_new_request(&mut self) {
        self.submission = ContactSubmission::default();
        self.outcome = SubmissionOutcome::Idle;
        self.submitting = false;
    }

    /// Validate, deliver through `sink` and apply the result.
    pub async fn submit_with<S: LeadSink + ?Sized>(
        &mut self,
        sink: &S,
        now: DateTime<Utc>,
    ) -> Result<(), SubmitError> {
        let payload = self.begin_submit(now)?;
        let result = sink.deliver(payload).await;
        self.finish_submit(result.clone());
        result.map_err(SubmitError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn filled() -> FormController {
        let mut form = FormController::new();
        form.set_field(Field::Nom, "Dupont");
        form.set_field(Field::Prenom, "Jean");
        form.set_field(Field::Email, "jean@example.fr");
        form.set_field(Field::Telephone, "0612345678");
        form.set_field(Field::FactureElectricite, "150");
        form.select_coordinate(Coordinate::new(48.8566, 2.3522));
        form
    }

    #[test]
    fn second_begin_while_in_flight_is_busy() {
        let mut form = filled();
        assert!(form.begin_submit(Utc::now()).is_ok());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(Utc::now()), Err(SubmitError::Busy));
        assert!(form.is_submitting());
    }

    #[test]
    fn rejection_exits_submitting_and_sets_message() {
        let mut form = filled();
        form.set_field(Field::Email, "");
        let err = form.begin_submit(Utc::now()).unwrap_err();
        assert_eq!(err, SubmitError::Validation(ValidationError::MissingFields));
        assert!(!form.is_submitting());
        assert_eq!(form.error_message(), Some("Veuillez remplir tous les champs"));
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut form = filled();
        form.finish_submit(Err(SubmissionError::Status(502)));
        assert!(form.error_message().is_some());
        form.begin_submit(Utc::now()).unwrap();
        assert_eq!(form.outcome(), &SubmissionOutcome::Idle);
    }

    #[test]
    fn unknown_input_name_is_ignored() {
        let mut form = FormController::new();
        assert!(!form.set_field_by_name("adresse", "1 rue de la Paix"));
        assert_eq!(form.submission(), &ContactSubmission::default());
        assert!(form.set_field_by_name("factureElectricite", "90"));
        assert_eq!(form.submission().monthly_bill_amount, "90");
    }

    #[test]
    fn new_request_returns_to_idle() {
        let mut form = filled();
        form.begin_submit(Utc::now()).unwrap();
        form.finish_submit(Ok(()));
        assert_eq!(form.outcome(), &SubmissionOutcome::Success);
        form.set_field(Field::Nom, "Martin");
        form.start_new_request();
        assert_eq!(form, FormController::new());
    }
}
