//! Error types for the submission lifecycle.
//!
//! Validation failures are not errors; see [`crate::Issue`].

use thiserror::Error;

/// Failure reported by a [`crate::Transport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The receiving end answered but refused the submission.
    #[error("submission rejected: {reason}")]
    Rejected { reason: String },

    /// The receiving end could not be reached.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Message shown to the user above the submit control.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => {
                "Ihre Anfrage konnte nicht verarbeitet werden. Bitte prüfen Sie Ihre Angaben."
            }
            Self::Unavailable(_) => {
                "Senden fehlgeschlagen. Bitte versuchen Sie es später erneut."
            }
        }
    }
}

/// Misuse of the submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// A submission is already in flight for this form.
    #[error("a submission is already in progress")]
    AlreadyInFlight,
}
