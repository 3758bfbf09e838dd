//! Field descriptors: what a rule needs to know about a form control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `type` of a form control, as far as validation cares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
    Checkbox,
    Radio,
    Textarea,
    Select,
    /// Any other input type, kept verbatim (lowercase).
    Other(String),
}

impl InputKind {
    /// Parse an input `type` attribute value.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "email" => Self::Email,
            "tel" => Self::Tel,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "textarea" => Self::Textarea,
            "select" | "select-one" | "select-multiple" => Self::Select,
            other => Self::Other(other.to_string()),
        }
    }

    /// The attribute spelling of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Other(s) => s,
        }
    }

    /// Checkboxes and radios carry a checked state.
    pub fn is_checkable(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

impl From<String> for InputKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<InputKind> for String {
    fn from(kind: InputKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a form control taken at validation time.
///
/// The combination of `input_type` and `id` selects the applicable rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    /// The control's `id` attribute (may be empty).
    pub id: String,
    /// The control's `name` attribute, used as the payload key.
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: InputKind,
    /// Raw (untrimmed) value.
    pub value: String,
    pub required: bool,
    pub checked: bool,
}

impl FieldDescriptor {
    /// Create a descriptor with an empty value.
    ///
    /// Checkable controls get the browser's default value `on`.
    pub fn new(id: &str, input_type: InputKind) -> Self {
        let value = if input_type.is_checkable() { "on" } else { "" };
        Self {
            id: id.to_string(),
            name: id.to_string(),
            input_type,
            value: value.to_string(),
            required: false,
            checked: false,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Identifier for reports: id, then name, then a placeholder.
    pub fn key(&self) -> &str {
        if !self.id.is_empty() {
            &self.id
        } else if !self.name.is_empty() {
            &self.name
        } else {
            "(unnamed)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_parse() {
        assert_eq!(InputKind::parse("EMAIL"), InputKind::Email);
        assert_eq!(InputKind::parse(""), InputKind::Text);
        assert_eq!(InputKind::parse("select-one"), InputKind::Select);
        assert_eq!(
            InputKind::parse("date"),
            InputKind::Other("date".to_string())
        );
        assert_eq!(InputKind::parse("date").as_str(), "date");
    }

    #[test]
    fn test_checkbox_defaults_to_on() {
        let field = FieldDescriptor::new("privacy", InputKind::Checkbox);
        assert_eq!(field.value, "on");
        assert!(!field.checked);
    }

    #[test]
    fn test_key_fallbacks() {
        let mut field = FieldDescriptor::new("", InputKind::Text);
        assert_eq!(field.key(), "(unnamed)");
        field.name = "company".to_string();
        assert_eq!(field.key(), "company");
    }

    #[test]
    fn test_deserialize_type_field() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"id":"phone","type":"tel","value":"0301234567"}"#).unwrap();
        assert_eq!(field.input_type, InputKind::Tel);
        assert!(!field.required);
    }
}
