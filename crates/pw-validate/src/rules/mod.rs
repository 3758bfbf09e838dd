//! Field rules and their precedence.
//!
//! Presence (required / empty) is checked before any rule. After that,
//! rules run in [`RuleSet`] order and the first applicable rule that
//! rejects the value decides the issue.

mod kind;
mod patterns;
mod registry;

pub use kind::{MESSAGE_MIN_CHARS, RuleKind};
pub use registry::RuleSet;
