//! Error types for the lead form.
//!
//! `ValidationError` messages are shown to the user as-is. `SubmissionError`
//! is diagnostic only; the page renders
//! [`GENERIC_ERROR_MESSAGE`](crate::config::GENERIC_ERROR_MESSAGE) instead.

use thiserror::Error;

/// The user left something out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Veuillez remplir tous les champs")]
    MissingFields,
    #[error("Veuillez sélectionner l'emplacement de votre toiture sur la carte")]
    MissingLocation,
}

/// The outbound request did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("webhook answered with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("webhook did not answer within {0} ms")]
    Timeout(u32),
    #[error("could not encode payload: {0}")]
    Encode(String),
}

/// An input `name` that is not part of the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

/// Why a submit attempt ended without a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A submission from this form is already in flight.
    #[error("a submission is already in progress")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Delivery(#[from] SubmissionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Veuillez remplir tous les champs"
        );
        assert!(ValidationError::MissingLocation
            .to_string()
            .contains("sur la carte"));
    }

    #[test]
    fn unknown_field_names_the_input() {
        assert_eq!(
            UnknownField("adresse".into()).to_string(),
            "unknown form field 'adresse'"
        );
    }

    #[test]
    fn submit_error_is_transparent_over_validation() {
        let err: SubmitError = ValidationError::MissingFields.into();
        assert_eq!(err.to_string(), ValidationError::MissingFields.to_string());
    }
}
