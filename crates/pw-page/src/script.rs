//! Scripted interaction replay.
//!
//! A script is a TOML document with one `[[step]]` table per action:
//!
//! ```toml
//! [[step]]
//! action = "click"
//! target = ".navbar-toggler"
//!
//! [[step]]
//! action = "type"
//! target = "#email"
//! text = "anna@example.de"
//!
//! [[step]]
//! action = "wait"
//! ms = 1000
//! ```

use std::path::Path;

use pw_common::Millis;
use pw_dom::NodeId;
use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};
use crate::runtime::Page;

fn full_ratio() -> f64 {
    1.0
}

/// One scripted action. Targets are selectors; the first match is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Click { target: String },
    /// Replace the value and fire `input`.
    Type { target: String, text: String },
    Blur { target: String },
    Submit { target: String },
    Key { key: String },
    Resize { width: u32 },
    Scroll { y: f64 },
    Intersect {
        target: String,
        #[serde(default = "full_ratio")]
        ratio: f64,
    },
    Hover { target: String },
    Leave { target: String },
    /// Advance the virtual clock.
    Wait { ms: Millis },
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl EventScript {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|source| PageError::Parse {
            what: "event script",
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step against `page`. Stops at the first failing step.
    pub fn run(&self, page: &mut Page) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(index, ?step, "Running step");
            step.run(page)?;
        }
        Ok(())
    }
}

impl Step {
    pub fn run(&self, page: &mut Page) -> Result<()> {
        match self {
            Self::Click { target } => {
                let node = resolve(page, target)?;
                page.click(node)?;
            }
            Self::Type { target, text } => {
                let node = resolve(page, target)?;
                page.type_text(node, text)?;
            }
            Self::Blur { target } => {
                let node = resolve(page, target)?;
                page.blur(node)?;
            }
            Self::Submit { target } => {
                let node = resolve(page, target)?;
                page.submit(node)?;
            }
            Self::Key { key } => {
                page.key_down(key)?;
            }
            Self::Resize { width } => {
                page.resize(*width)?;
            }
            Self::Scroll { y } => {
                page.scroll(*y)?;
            }
            Self::Intersect { target, ratio } => {
                let node = resolve(page, target)?;
                page.intersect(node, *ratio)?;
            }
            Self::Hover { target } => {
                let node = resolve(page, target)?;
                page.hover(node)?;
            }
            Self::Leave { target } => {
                let node = resolve(page, target)?;
                page.leave(node)?;
            }
            Self::Wait { ms } => {
                page.advance(*ms);
            }
        }
        Ok(())
    }
}

fn resolve(page: &Page, selector: &str) -> Result<NodeId> {
    page.document()
        .query_selector(selector)?
        .ok_or_else(|| PageError::TargetNotFound {
            selector: selector.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let script = EventScript::from_toml_str(
            r##"
[[step]]
action = "click"
target = ".navbar-toggler"

[[step]]
action = "intersect"
target = "[data-count]"

[[step]]
action = "wait"
ms = 250
"##,
        )
        .unwrap();
        assert_eq!(script.len(), 3);
        assert_eq!(
            script.steps[1],
            Step::Intersect {
                target: "[data-count]".to_string(),
                ratio: 1.0
            }
        );
        assert_eq!(script.steps[2], Step::Wait { ms: 250 });
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = EventScript::from_toml_str(
            r#"
[[step]]
action = "teleport"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, PageError::Parse { .. }));
    }
}
