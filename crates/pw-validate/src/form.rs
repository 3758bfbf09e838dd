//! Form-level bookkeeping: per-field states and full-form reports.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::{FieldEvent, FieldState};
use crate::result::FieldValidationResult;

/// Per-field states of one form, keyed by whatever handle the caller uses.
#[derive(Debug, Clone)]
pub struct FormState<K: Ord + Copy> {
    fields: BTreeMap<K, FieldState>,
}

impl<K: Ord + Copy> Default for FormState<K> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> FormState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state; unseen fields are pristine.
    pub fn state(&self, key: K) -> FieldState {
        self.fields.get(&key).copied().unwrap_or_default()
    }

    /// Apply an event and return the new state.
    pub fn apply(&mut self, key: K, event: FieldEvent) -> FieldState {
        let next = self.state(key).next(event);
        self.fields.insert(key, next);
        next
    }

    /// Fields currently showing an error, in key order.
    pub fn invalid_fields(&self) -> Vec<K> {
        self.fields
            .iter()
            .filter(|(_, state)| state.is_invalid())
            .map(|(key, _)| *key)
            .collect()
    }
}

/// Results of one full-form validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    results: Vec<FieldValidationResult>,
}

impl FormReport {
    pub fn new(results: Vec<FieldValidationResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[FieldValidationResult] {
        &self.results
    }

    /// True when no field failed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(FieldValidationResult::is_valid)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &FieldValidationResult> {
        self.results.iter().filter(|result| !result.is_valid())
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid().count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
