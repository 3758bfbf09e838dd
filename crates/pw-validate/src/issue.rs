//! Validation issues.
//!
//! Each variant maps to one fixed, user-facing message. Messages use the
//! site's single locale (German).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Issue {
    /// Required field is empty after trimming.
    Required,
    /// Value is not shaped like an email address.
    InvalidEmail,
    /// Value is not a 10-20 character phone number.
    InvalidPhone,
    /// Value is not a 2-50 character person name.
    InvalidName,
    /// Free-text message is shorter than the minimum.
    MessageTooShort,
    /// Required consent checkbox is unchecked.
    ConsentRequired,
}

impl Issue {
    /// Stable short code (used in logs and reports).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
            Self::InvalidName => "name",
            Self::MessageTooShort => "message",
            Self::ConsentRequired => "privacy",
        }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "Dieses Feld ist erforderlich",
            Self::InvalidEmail => "Bitte geben Sie eine gültige E-Mail-Adresse ein",
            Self::InvalidPhone => "Bitte geben Sie eine gültige Telefonnummer ein",
            Self::InvalidName => "Bitte geben Sie einen gültigen Namen ein (2-50 Zeichen)",
            Self::MessageTooShort => "Bitte geben Sie mindestens 10 Zeichen ein",
            Self::ConsentRequired => "Sie müssen die Datenschutzerklärung akzeptieren",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
