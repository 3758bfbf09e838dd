//! Document adapter for the validation engine.
//!
//! Reads field descriptors out of the document, feeds the pure engine, and
//! renders the outcome: `is-invalid` on the control plus a sibling
//! `.invalid-feedback` element holding the message.

use pw_common::Millis;
use pw_dom::{Document, ElementSpec, NodeId};
use pw_validate::{
    Decoration, FieldDescriptor, FieldEvent, FieldState, FormPayload, FormState, InputKind,
    RuleSet, SubmissionCycle, SubmissionOutcome, Transport,
};
use serde::Serialize;

use crate::config::PageConfig;
use crate::error::Result;

const INVALID_CLASS: &str = "is-invalid";
const FEEDBACK_CLASS: &str = "invalid-feedback";
const FORM_FEEDBACK_CLASS: &str = "form-feedback";

/// One form on the page.
#[derive(Debug, Clone)]
struct BoundForm {
    form: NodeId,
    fields: Vec<NodeId>,
    submit: Option<NodeId>,
    state: FormState<NodeId>,
    cycle: SubmissionCycle,
}

/// Rendered state of one field, for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub form: usize,
    pub field: String,
    pub state: FieldState,
    pub message: String,
}

/// Rendered state of one submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitView {
    pub form: usize,
    pub disabled: bool,
    pub label: String,
}

/// Validation and submission for every form on the page.
#[derive(Debug, Clone)]
pub struct FormController {
    forms: Vec<BoundForm>,
}

impl FormController {
    /// Returns `Ok(None)` when the page has no forms.
    pub fn attach(doc: &Document, config: &PageConfig) -> Result<Option<Self>> {
        let nodes = doc.query_selector_all(&config.form)?;
        if nodes.is_empty() {
            tracing::debug!("No forms found, form validation disabled");
            return Ok(None);
        }

        let mut forms = Vec::with_capacity(nodes.len());
        for form in nodes {
            let fields = doc.query_all_within(form, &config.form_fields)?;
            let submit = doc.query_within(form, &config.submit_button)?;
            tracing::debug!(%form, fields = fields.len(), "Form attached");
            forms.push(BoundForm {
                form,
                fields,
                submit,
                state: FormState::new(),
                cycle: SubmissionCycle::new(),
            });
        }
        Ok(Some(Self { forms }))
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn form(&self, index: usize) -> Option<NodeId> {
        self.forms.get(index).map(|bound| bound.form)
    }

    pub fn fields(&self, index: usize) -> &[NodeId] {
        self.forms
            .get(index)
            .map(|bound| bound.fields.as_slice())
            .unwrap_or_default()
    }

    pub fn field_state(&self, index: usize, field: NodeId) -> FieldState {
        self.forms
            .get(index)
            .map(|bound| bound.state.state(field))
            .unwrap_or_default()
    }

    pub fn is_submitting(&self, index: usize) -> bool {
        self.forms
            .get(index)
            .is_some_and(|bound| bound.cycle.is_in_flight())
    }

    /// Focus left a field: validate it alone.
    pub fn on_blur(&mut self, doc: &mut Document, index: usize, field: NodeId) -> Result<()> {
        let Some(bound) = self.forms.get_mut(index) else {
            return Ok(());
        };
        let result = RuleSet::standard().evaluate(&descriptor(doc, field)?);
        let next = bound.state.apply(field, FieldEvent::Blurred(result.issue));
        render(doc, field, next.decoration())
    }

    /// The value changed: clear any error without validating.
    pub fn on_input(&mut self, doc: &mut Document, index: usize, field: NodeId) -> Result<()> {
        let Some(bound) = self.forms.get_mut(index) else {
            return Ok(());
        };
        bound.state.apply(field, FieldEvent::Edited);
        render(doc, field, Decoration::Clear)
    }

    /// Validate every field and, when all pass, start the submission.
    ///
    /// Returns the completion deadline of a started submission.
    pub fn on_submit(
        &mut self,
        doc: &mut Document,
        index: usize,
        now: Millis,
    ) -> Result<Option<Millis>> {
        let Some(bound) = self.forms.get_mut(index) else {
            return Ok(None);
        };
        if bound.cycle.is_in_flight() {
            tracing::debug!(form = index, "Submission already in flight, ignoring submit");
            return Ok(None);
        }

        let descriptors = bound
            .fields
            .iter()
            .map(|field| descriptor(doc, *field))
            .collect::<Result<Vec<_>>>()?;
        let report = RuleSet::standard().validate_form(&descriptors);
        for (field, result) in bound.fields.iter().zip(report.results()) {
            let next = bound
                .state
                .apply(*field, FieldEvent::SubmitChecked(result.issue));
            render(doc, *field, next.decoration())?;
        }
        if !report.is_valid() {
            for result in report.invalid() {
                tracing::info!(
                    form = index,
                    field = %result.field_id,
                    rule = result.issue.map_or("", |issue| issue.code()),
                    "Field invalid"
                );
            }
            return Ok(None);
        }

        let payload = payload(&descriptors);
        let label = bound
            .submit
            .map(|button| doc.text(button).to_string())
            .unwrap_or_default();
        let started = match bound.cycle.start(now, &label, payload) {
            Ok(started) => started,
            Err(error) => {
                tracing::debug!(form = index, %error, "Submission refused");
                return Ok(None);
            }
        };

        clear_form_feedback(doc, bound.form)?;
        if let Some(button) = bound.submit {
            doc.set_disabled(button, true)?;
            doc.set_text(button, started.markup)?;
        }
        Ok(Some(started.due_at))
    }

    /// Finish a due submission through `transport`.
    pub fn complete(
        &mut self,
        doc: &mut Document,
        index: usize,
        now: Millis,
        transport: &mut dyn Transport,
    ) -> Result<Option<SubmissionOutcome>> {
        let Some(bound) = self.forms.get_mut(index) else {
            return Ok(None);
        };
        let Some(completion) = bound.cycle.complete(now, transport) else {
            return Ok(None);
        };

        if let Some(button) = bound.submit {
            doc.set_disabled(button, false)?;
            doc.set_text(button, &completion.restored_label)?;
        }
        match &completion.outcome {
            SubmissionOutcome::Delivered { redirect_to } => doc.navigate(redirect_to),
            SubmissionOutcome::Failed(error) => {
                show_form_feedback(doc, bound.form, error.user_message())?;
            }
        }
        Ok(Some(completion.outcome))
    }

    /// Rendered state of every field.
    pub fn field_views(&self, doc: &Document) -> Vec<FieldView> {
        self.forms
            .iter()
            .enumerate()
            .flat_map(|(index, bound)| {
                bound.fields.iter().map(move |field| {
                    let state = bound.state.state(*field);
                    let element = doc.element(*field).ok();
                    let name = element
                        .and_then(|e| e.id().or_else(|| e.attr("name")))
                        .unwrap_or("(unnamed)");
                    FieldView {
                        form: index,
                        field: name.to_string(),
                        state,
                        message: feedback_element(doc, *field)
                            .map(|feedback| doc.text(feedback).to_string())
                            .unwrap_or_default(),
                    }
                })
            })
            .collect()
    }

    /// Rendered state of every submit control.
    pub fn submit_views(&self, doc: &Document) -> Vec<SubmitView> {
        self.forms
            .iter()
            .enumerate()
            .filter_map(|(index, bound)| {
                let button = bound.submit?;
                let element = doc.element(button).ok()?;
                Some(SubmitView {
                    form: index,
                    disabled: element.disabled(),
                    label: element.text().to_string(),
                })
            })
            .collect()
    }
}

/// Snapshot the descriptor of a form control.
pub fn descriptor(doc: &Document, field: NodeId) -> Result<FieldDescriptor> {
    let element = doc.element(field)?;
    let input_type = match element.tag_name() {
        "textarea" => InputKind::Textarea,
        "select" => InputKind::Select,
        _ => InputKind::parse(element.attr("type").unwrap_or("text")),
    };
    let mut value = element.value().to_string();
    if value.is_empty() && input_type.is_checkable() {
        value = "on".to_string();
    }
    Ok(FieldDescriptor {
        id: element.id().unwrap_or_default().to_string(),
        name: element.attr("name").unwrap_or_default().to_string(),
        input_type,
        value,
        required: element.has_attr("required"),
        checked: element.checked(),
    })
}

/// Named field values; unchecked checkboxes and radios are left out.
fn payload(descriptors: &[FieldDescriptor]) -> FormPayload {
    let mut payload = FormPayload::new();
    for field in descriptors {
        if field.name.is_empty() || (field.input_type.is_checkable() && !field.checked) {
            continue;
        }
        payload.insert(&field.name, &field.value);
    }
    payload
}

fn feedback_element(doc: &Document, field: NodeId) -> Option<NodeId> {
    let parent = doc.parent(field)?;
    doc.query_within(parent, &format!(".{FEEDBACK_CLASS}"))
        .ok()
        .flatten()
}

fn render(doc: &mut Document, field: NodeId, decoration: Decoration) -> Result<()> {
    match decoration {
        Decoration::Show(message) => {
            doc.add_class(field, INVALID_CLASS)?;
            let feedback = match feedback_element(doc, field) {
                Some(existing) => existing,
                None => {
                    let parent = doc.parent(field).unwrap_or_else(|| doc.body());
                    doc.append(parent, ElementSpec::new("div").class(FEEDBACK_CLASS))?
                }
            };
            doc.set_text(feedback, message)?;
        }
        Decoration::Clear => {
            doc.remove_class(field, INVALID_CLASS)?;
            if let Some(feedback) = feedback_element(doc, field) {
                doc.set_text(feedback, "")?;
            }
        }
    }
    Ok(())
}

fn show_form_feedback(doc: &mut Document, form: NodeId, message: &str) -> Result<()> {
    let selector = format!(".{FORM_FEEDBACK_CLASS}");
    let feedback = match doc.query_within(form, &selector)? {
        Some(existing) => existing,
        None => doc.append(
            form,
            ElementSpec::new("div")
                .class(FORM_FEEDBACK_CLASS)
                .class("text-danger")
                .attr("role", "alert"),
        )?,
    };
    doc.set_text(feedback, message)?;
    Ok(())
}

fn clear_form_feedback(doc: &mut Document, form: NodeId) -> Result<()> {
    if let Some(feedback) = doc.query_within(form, &format!(".{FORM_FEEDBACK_CLASS}"))? {
        doc.set_text(feedback, "")?;
    }
    Ok(())
}
