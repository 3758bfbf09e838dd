//! Per-field state machine.

use serde::Serialize;

use crate::issue::Issue;

/// Display state of one field: `Pristine -> Invalid <-> Valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FieldState {
    /// Never checked, or edited since the last failed check.
    #[default]
    Pristine,
    Valid,
    Invalid(Issue),
}

/// Input to the field state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Focus left the field; carries the evaluation result.
    Blurred(Option<Issue>),
    /// The value changed. Not re-validated.
    Edited,
    /// The form was submitted; every field is evaluated.
    SubmitChecked(Option<Issue>),
}

/// What the renderer must do with a field's decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Mark invalid and show the message.
    Show(&'static str),
    /// Remove the mark and blank the message.
    Clear,
}

impl FieldState {
    /// Pure transition function.
    #[must_use]
    pub fn next(self, event: FieldEvent) -> Self {
        match event {
            FieldEvent::Blurred(outcome) | FieldEvent::SubmitChecked(outcome) => match outcome {
                Some(issue) => Self::Invalid(issue),
                None => Self::Valid,
            },
            FieldEvent::Edited => match self {
                Self::Invalid(_) => Self::Pristine,
                other => other,
            },
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn issue(&self) -> Option<Issue> {
        match self {
            Self::Invalid(issue) => Some(*issue),
            _ => None,
        }
    }

    /// Decoration matching this state.
    pub fn decoration(&self) -> Decoration {
        match self {
            Self::Invalid(issue) => Decoration::Show(issue.message()),
            Self::Pristine | Self::Valid => Decoration::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_outcomes() {
        let state = FieldState::Pristine.next(FieldEvent::Blurred(Some(Issue::Required)));
        assert_eq!(state, FieldState::Invalid(Issue::Required));
        assert_eq!(state.next(FieldEvent::Blurred(None)), FieldState::Valid);
    }

    #[test]
    fn test_edit_clears_invalid_without_validating() {
        let state = FieldState::Invalid(Issue::InvalidEmail).next(FieldEvent::Edited);
        assert_eq!(state, FieldState::Pristine);
        assert_eq!(state.decoration(), Decoration::Clear);

        assert_eq!(FieldState::Valid.next(FieldEvent::Edited), FieldState::Valid);
    }

    #[test]
    fn test_submit_overrides_prior_state() {
        let state = FieldState::Valid.next(FieldEvent::SubmitChecked(Some(Issue::InvalidPhone)));
        assert_eq!(
            state.decoration(),
            Decoration::Show("Bitte geben Sie eine gültige Telefonnummer ein")
        );
    }
}
