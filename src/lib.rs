//! Lead capture for rooftop solar studies.
//!
//! The library half holds everything that does not touch the DOM: the lead
//! model and its wire format, presence validation, the form controller state
//! machine and webhook delivery. The Yew binary renders on top of it.

pub mod config;
pub mod error;
pub mod form;
pub mod lead;
pub mod utils;
pub mod webhook;

pub use error::{SubmissionError, SubmitError, ValidationError};
pub use form::{FormController, LeadSink, SubmissionOutcome};
pub use lead::{ContactSubmission, Coordinate, Field, WebhookPayload};
pub use webhook::WebhookSink;
