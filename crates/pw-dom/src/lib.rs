//! Headless document model for pagewire.
//!
//! Controllers never talk to a browser directly; they read and write this
//! document. It models exactly what the behavior layer touches:
//!
//! - **Elements** in an arena, addressed by [`NodeId`]
//! - **Selectors**: tag, `#id`, `.class`, attribute matchers
//!   (`[a]`, `[a=v]`, `[a^=v]`, `[a*=v]`, `[a$=v]`), `:not(...)` and lists
//! - **Form state**: value, checked, disabled
//! - **Layout**: offsets and sizes set by the host, viewport, scroll position
//! - **Focus** and the current **location**
//!
//! # Example
//!
//! ```ignore
//! use pw_dom::{Document, ElementSpec};
//!
//! let mut doc = Document::new();
//! let nav = doc.append(doc.body(), ElementSpec::new("nav").class("navbar"))?;
//! let toggle = doc.append(nav, ElementSpec::new("button").class("navbar-toggler"))?;
//! assert_eq!(doc.query_selector(".navbar-toggler")?, Some(toggle));
//! ```

mod document;
mod element;
mod error;
mod selector;

pub use document::{Document, ScrollBehavior, ScrollRequest, Viewport};
pub use element::{Element, ElementSpec, Layout, NodeId};
pub use error::{DomError, Result};
pub use selector::SelectorList;
