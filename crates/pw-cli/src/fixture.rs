//! Form fixtures: a TOML list of field descriptors.
//!
//! ```toml
//! [[field]]
//! id = "email"
//! name = "email"
//! type = "email"
//! value = "anna@example.de"
//! required = true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use pw_validate::{FieldDescriptor, FormReport, RuleSet};
use serde::Deserialize;

/// Fields of one form, in document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormFixture {
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDescriptor>,
}

impl FormFixture {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("parse form fixture")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("read form fixture {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Evaluate every field with the standard rules.
    pub fn validate(&self) -> FormReport {
        RuleSet::standard().validate_form(&self.fields)
    }
}
