//! The individual shape rules.

use serde::{Deserialize, Serialize};

use super::patterns::{EMAIL, PERSON_NAME, PHONE};
use crate::descriptor::{FieldDescriptor, InputKind};
use crate::issue::Issue;

/// Minimum length (in characters) of a free-text message.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Identifiers that mark a person-name field.
const NAME_IDS: &[&str] = &["name", "firstName", "lastName"];

/// A rule keyed by the field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Email,
    Phone,
    PersonName,
    Message,
    Consent,
}

impl RuleKind {
    /// All rules in their default precedence.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Email,
            Self::Phone,
            Self::PersonName,
            Self::Message,
            Self::Consent,
        ]
    }

    /// Check whether this rule applies to the field at all.
    pub fn applies_to(&self, field: &FieldDescriptor) -> bool {
        match self {
            Self::Email => field.input_type == InputKind::Email || field.id == "email",
            Self::Phone => field.input_type == InputKind::Tel || field.id == "phone",
            Self::PersonName => NAME_IDS.contains(&field.id.as_str()),
            Self::Message => field.id == "message",
            Self::Consent => field.input_type == InputKind::Checkbox && field.required,
        }
    }

    /// Check the trimmed value (or checked state) against the rule.
    pub fn accepts(&self, field: &FieldDescriptor, trimmed: &str) -> bool {
        match self {
            Self::Email => EMAIL.is_match(trimmed),
            Self::Phone => PHONE.is_match(trimmed),
            Self::PersonName => PERSON_NAME.is_match(trimmed),
            Self::Message => trimmed.chars().count() >= MESSAGE_MIN_CHARS,
            Self::Consent => field.checked,
        }
    }

    /// Issue reported when the rule rejects a value.
    pub fn issue(&self) -> Issue {
        match self {
            Self::Email => Issue::InvalidEmail,
            Self::Phone => Issue::InvalidPhone,
            Self::PersonName => Issue::InvalidName,
            Self::Message => Issue::MessageTooShort,
            Self::Consent => Issue::ConsentRequired,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::PersonName => "Person name",
            Self::Message => "Message",
            Self::Consent => "Privacy consent",
        }
    }

    /// Which fields the rule selects.
    pub fn selects(&self) -> &'static str {
        match self {
            Self::Email => "type=email or id=email",
            Self::Phone => "type=tel or id=phone",
            Self::PersonName => "id=name|firstName|lastName",
            Self::Message => "id=message",
            Self::Consent => "type=checkbox and required",
        }
    }

    /// What the rule demands of the value.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Email => "local@domain.tld, no whitespace",
            Self::Phone => "10-20 of digits, spaces, + - ( )",
            Self::PersonName => "2-50 letters, spaces, hyphens, apostrophes",
            Self::Message => "at least 10 characters",
            Self::Consent => "must be checked",
        }
    }
}
