//! Form validation engine.
//!
//! Pure rule evaluation and bookkeeping with no rendering surface:
//!
//! - **Descriptors**: the input type and identifier that select a rule
//! - **Rules**: an ordered [`RuleSet`]; the first applicable rule that
//!   rejects a value decides the [`Issue`]
//! - **Field state**: `Pristine -> Invalid <-> Valid`, driven by blur,
//!   edit and submit events
//! - **Submission**: the submit-control state, the in-flight cycle and the
//!   pluggable [`Transport`]
//!
//! Validation failures are values, never errors. Only the submission
//! lifecycle has error types.
//!
//! # Example
//!
//! ```ignore
//! use pw_validate::{FieldDescriptor, InputKind, RuleSet};
//!
//! let field = FieldDescriptor::new("email", InputKind::Email)
//!     .with_value("a@b.co")
//!     .required();
//! assert!(RuleSet::standard().evaluate(&field).is_valid());
//! ```

mod descriptor;
mod error;
mod field;
mod form;
mod issue;
mod result;
mod rules;
mod submission;

pub use descriptor::{FieldDescriptor, InputKind};
pub use error::{SubmissionError, TransportError};
pub use field::{Decoration, FieldEvent, FieldState};
pub use form::{FormReport, FormState};
pub use issue::Issue;
pub use result::FieldValidationResult;
pub use rules::{MESSAGE_MIN_CHARS, RuleKind, RuleSet};
pub use submission::{
    CONFIRMATION_PAGE, Completion, DEFAULT_SUBMIT_LABEL, FormPayload, LOADING_LABEL,
    LOADING_MARKUP, SimulatedTransport, Started, SubmissionCycle, SubmissionOutcome,
    SubmitButtonState, Transport,
};
