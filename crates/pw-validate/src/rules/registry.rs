//! Ordered rule set.

use std::sync::LazyLock;

use super::kind::RuleKind;
use crate::descriptor::FieldDescriptor;
use crate::form::FormReport;
use crate::issue::Issue;
use crate::result::FieldValidationResult;

static STANDARD: LazyLock<RuleSet> = LazyLock::new(RuleSet::default);

/// Rules in precedence order. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RuleKind>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(RuleKind::all().to_vec())
    }
}

impl RuleSet {
    /// Create a rule set with an explicit precedence.
    pub fn new(rules: Vec<RuleKind>) -> Self {
        Self { rules }
    }

    /// The process-wide standard rule set.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleKind> {
        self.rules.iter()
    }

    /// Rules that apply to `field`, in precedence order.
    pub fn applicable<'a>(
        &'a self,
        field: &'a FieldDescriptor,
    ) -> impl Iterator<Item = RuleKind> + 'a {
        self.rules
            .iter()
            .copied()
            .filter(move |rule| rule.applies_to(field))
    }

    /// Evaluate one field.
    ///
    /// 1. Required and empty after trimming: [`Issue::Required`].
    /// 2. Empty and optional: valid.
    /// 3. Otherwise the first applicable rule that rejects the value.
    pub fn evaluate(&self, field: &FieldDescriptor) -> FieldValidationResult {
        let trimmed = field.value.trim();
        let key = field.key();

        if field.required && trimmed.is_empty() {
            return FieldValidationResult::invalid(key, Issue::Required);
        }
        if trimmed.is_empty() {
            return FieldValidationResult::valid(key);
        }

        match self
            .applicable(field)
            .find(|rule| !rule.accepts(field, trimmed))
        {
            Some(rule) => FieldValidationResult::invalid(key, rule.issue()),
            None => FieldValidationResult::valid(key),
        }
    }

    /// Evaluate every field, regardless of earlier results.
    pub fn validate_form(&self, fields: &[FieldDescriptor]) -> FormReport {
        let results: Vec<FieldValidationResult> =
            fields.iter().map(|field| self.evaluate(field)).collect();
        let report = FormReport::new(results);
        tracing::debug!(
            fields = report.len(),
            invalid = report.invalid_count(),
            "Validated form"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::InputKind;

    fn check(field: &FieldDescriptor) -> Option<Issue> {
        RuleSet::standard().evaluate(field).issue
    }

    #[test]
    fn test_required_wins_over_shape_rules() {
        let field = FieldDescriptor::new("email", InputKind::Email)
            .with_value("   ")
            .required();
        assert_eq!(check(&field), Some(Issue::Required));
    }

    #[test]
    fn test_optional_empty_is_valid() {
        let field = FieldDescriptor::new("phone", InputKind::Tel);
        assert_eq!(check(&field), None);
    }

    #[test]
    fn test_value_is_trimmed() {
        let field = FieldDescriptor::new("email", InputKind::Email).with_value("  a@b.co  ");
        assert_eq!(check(&field), None);
    }

    #[test]
    fn test_precedence_when_several_rules_apply() {
        // id=phone selects Phone, type=email selects Email; Email comes first
        let field = FieldDescriptor::new("phone", InputKind::Email).with_value("not-a-number");
        assert_eq!(check(&field), Some(Issue::InvalidEmail));

        let reordered = RuleSet::new(vec![RuleKind::Phone, RuleKind::Email]);
        assert_eq!(
            reordered.evaluate(&field).issue,
            Some(Issue::InvalidPhone)
        );
    }

    #[test]
    fn test_unchecked_required_checkbox() {
        let field = FieldDescriptor::new("privacy", InputKind::Checkbox).required();
        assert_eq!(check(&field), Some(Issue::ConsentRequired));
        assert_eq!(check(&field.with_checked(true)), None);
    }

    #[test]
    fn test_unknown_field_is_valid() {
        let field = FieldDescriptor::new("company", InputKind::Text).with_value("x");
        assert_eq!(check(&field), None);
    }
}
