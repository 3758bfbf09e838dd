//! Submission lifecycle: submit-control state, in-flight cycle, transport.

use std::collections::BTreeMap;

use pw_common::Millis;
use pw_common::timing::SUBMIT_LATENCY_MS;
use serde::{Deserialize, Serialize};

use crate::error::{SubmissionError, TransportError};

/// Where the browsing context goes after a delivered submission.
pub const CONFIRMATION_PAGE: &str = "thank_you.html";

/// Label shown while a submission is in flight.
pub const LOADING_LABEL: &str = "Wird gesendet...";

/// Submit-control content while a submission is in flight.
pub const LOADING_MARKUP: &str =
    r#"<span class="spinner-border spinner-border-sm me-2"></span>Wird gesendet..."#;

/// Restored label when none was saved.
pub const DEFAULT_SUBMIT_LABEL: &str = "Senden";

/// State of a form's submit control.
///
/// The label is saved once per cycle and handed back exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub disabled: bool,
    pub saved_label: Option<String>,
}

impl SubmitButtonState {
    /// Disable the control and save its label. Returns the loading markup.
    pub fn begin(&mut self, current_label: &str) -> Result<&'static str, SubmissionError> {
        if self.disabled {
            return Err(SubmissionError::AlreadyInFlight);
        }
        self.disabled = true;
        self.saved_label = Some(current_label.to_string());
        Ok(LOADING_MARKUP)
    }

    /// Re-enable the control and take the saved label.
    pub fn restore(&mut self) -> String {
        self.disabled = false;
        self.saved_label
            .take()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string())
    }
}

/// Field-name to value mapping handed to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Delivers a validated payload somewhere.
///
/// Any `FnMut(&FormPayload) -> Result<(), TransportError>` is a transport.
pub trait Transport {
    fn send(&mut self, payload: &FormPayload) -> Result<(), TransportError>;
}

impl<F> Transport for F
where
    F: FnMut(&FormPayload) -> Result<(), TransportError>,
{
    fn send(&mut self, payload: &FormPayload) -> Result<(), TransportError> {
        self(payload)
    }
}

/// Transport that sends nothing and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl Transport for SimulatedTransport {
    fn send(&mut self, payload: &FormPayload) -> Result<(), TransportError> {
        tracing::debug!(fields = payload.len(), "Simulated submission delivered");
        Ok(())
    }
}

/// A submission that was accepted and is now waiting on its latency timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Started {
    pub due_at: Millis,
    /// Content to put into the submit control.
    pub markup: &'static str,
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered { redirect_to: &'static str },
    Failed(TransportError),
}

/// Result of completing a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Label to put back into the re-enabled submit control.
    pub restored_label: String,
    pub outcome: SubmissionOutcome,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    InFlight {
        due_at: Millis,
        payload: FormPayload,
    },
}

/// One form's submission cycle: idle, in flight, then idle again.
///
/// Started only after a fully valid pass. Runs to completion once started.
#[derive(Debug, Clone, Default)]
pub struct SubmissionCycle {
    button: SubmitButtonState,
    phase: Phase,
}

impl SubmissionCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self) -> &SubmitButtonState {
        &self.button
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    /// When the in-flight submission completes.
    pub fn due_at(&self) -> Option<Millis> {
        match self.phase {
            Phase::InFlight { due_at, .. } => Some(due_at),
            Phase::Idle => None,
        }
    }

    /// Begin a submission at `now`.
    pub fn start(
        &mut self,
        now: Millis,
        current_label: &str,
        payload: FormPayload,
    ) -> Result<Started, SubmissionError> {
        if self.is_in_flight() {
            return Err(SubmissionError::AlreadyInFlight);
        }
        let markup = self.button.begin(current_label)?;
        let due_at = now + SUBMIT_LATENCY_MS;
        tracing::info!(fields = payload.len(), due_at, "Submission started");
        self.phase = Phase::InFlight { due_at, payload };
        Ok(Started { due_at, markup })
    }

    /// Finish the submission if its latency has elapsed.
    ///
    /// Returns `None` while idle or before the deadline.
    pub fn complete(&mut self, now: Millis, transport: &mut dyn Transport) -> Option<Completion> {
        let due_at = self.due_at()?;
        if now < due_at {
            return None;
        }
        let Phase::InFlight { payload, .. } = std::mem::take(&mut self.phase) else {
            return None;
        };

        let restored_label = self.button.restore();
        let outcome = match transport.send(&payload) {
            Ok(()) => {
                tracing::info!(redirect_to = CONFIRMATION_PAGE, "Submission delivered");
                SubmissionOutcome::Delivered {
                    redirect_to: CONFIRMATION_PAGE,
                }
            }
            Err(error) => {
                tracing::warn!(%error, "Submission failed");
                SubmissionOutcome::Failed(error)
            }
        };
        Some(Completion {
            restored_label,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> FormPayload {
        let mut payload = FormPayload::new();
        payload.insert("email", "a@b.co");
        payload
    }

    #[test]
    fn test_button_label_saved_and_restored_once() {
        let mut button = SubmitButtonState::default();
        assert_eq!(button.begin("Absenden"), Ok(LOADING_MARKUP));
        assert!(button.disabled);
        assert_eq!(
            button.begin("again"),
            Err(SubmissionError::AlreadyInFlight)
        );

        assert_eq!(button.restore(), "Absenden");
        assert!(!button.disabled);
        assert_eq!(button.restore(), DEFAULT_SUBMIT_LABEL);
    }

    #[test]
    fn test_cycle_completes_after_latency() {
        let mut cycle = SubmissionCycle::new();
        let started = cycle.start(500, "Senden", payload()).unwrap();
        assert_eq!(started.due_at, 500 + SUBMIT_LATENCY_MS);
        assert!(cycle.button().disabled);

        let mut transport = SimulatedTransport;
        assert!(cycle.complete(1000, &mut transport).is_none());

        let completion = cycle.complete(1500, &mut transport).unwrap();
        assert_eq!(completion.restored_label, "Senden");
        assert_eq!(
            completion.outcome,
            SubmissionOutcome::Delivered {
                redirect_to: CONFIRMATION_PAGE
            }
        );
        assert!(!cycle.is_in_flight());
        assert!(!cycle.button().disabled);
    }

    #[test]
    fn test_second_start_while_in_flight_is_refused() {
        let mut cycle = SubmissionCycle::new();
        cycle.start(0, "Senden", payload()).unwrap();
        assert_eq!(
            cycle.start(10, "Senden", payload()),
            Err(SubmissionError::AlreadyInFlight)
        );
    }

    #[test]
    fn test_closure_transport_receives_payload() {
        let mut seen = Vec::new();
        let mut transport = |payload: &FormPayload| -> Result<(), TransportError> {
            seen.push(payload.get("email").map(str::to_string));
            Err(TransportError::Unavailable("offline".to_string()))
        };

        let mut cycle = SubmissionCycle::new();
        cycle.start(0, "Senden", payload()).unwrap();
        let completion = cycle.complete(SUBMIT_LATENCY_MS, &mut transport).unwrap();
        assert!(matches!(
            completion.outcome,
            SubmissionOutcome::Failed(TransportError::Unavailable(_))
        ));
        assert!(!cycle.button().disabled);
        assert_eq!(seen, vec![Some("a@b.co".to_string())]);
    }
}
