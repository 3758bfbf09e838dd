//! Per-field validation outcome.

use serde::Serialize;

use crate::issue::Issue;

/// Outcome of evaluating one field. Recomputed on every pass, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationResult {
    pub field_id: String,
    pub issue: Option<Issue>,
}

impl FieldValidationResult {
    pub fn valid(field_id: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            issue: None,
        }
    }

    pub fn invalid(field_id: &str, issue: Issue) -> Self {
        Self {
            field_id: field_id.to_string(),
            issue: Some(issue),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    /// Message to display; empty when valid.
    pub fn message(&self) -> &'static str {
        self.issue.map(|issue| issue.message()).unwrap_or("")
    }
}
