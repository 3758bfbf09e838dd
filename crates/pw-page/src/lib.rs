//! Page bootstrap for pagewire.
//!
//! A [`Page`] owns the document, the listener store, a virtual-time timer
//! queue and the [`ControllerRegistry`]. [`Page::start`] attaches every
//! controller exactly once:
//!
//! - navigation menu, scroll spy and smooth scrolling (`pw-nav`)
//! - form validation and submission ([`FormController`] over `pw-validate`)
//! - decorations: entrance animation, hover feedback, ripple, lazy
//!   loading, scroll-to-top, count-up and the privacy modal
//!
//! Events go through [`Page::dispatch`], which bubbles them from the target
//! to the window and honours `preventDefault`/`stopPropagation`. Timers
//! only fire inside [`Page::advance`].
//!
//! # Example
//!
//! ```ignore
//! use pw_page::{Page, demo};
//!
//! let mut page = Page::new(demo::landing_page()?);
//! page.start()?;
//! let toggle = page.document().query_selector(".navbar-toggler")?.unwrap();
//! page.click(toggle)?;
//! assert_eq!(page.menu_state().map(|m| m.is_open), Some(true));
//! ```

mod config;
pub mod decor;
pub mod demo;
mod error;
mod event;
mod forms;
mod listeners;
mod registry;
mod runtime;
mod script;
mod timers;

pub use config::PageConfig;
pub use error::{PageError, Result};
pub use event::{DispatchOutcome, EventKind, EventState, PageEvent, Target};
pub use forms::{FieldView, FormController, SubmitView, descriptor};
pub use listeners::{Handler, ListenerStore};
pub use registry::{ControllerRegistry, Controllers};
pub use runtime::{Page, PageSnapshot};
pub use script::{EventScript, Step};
pub use timers::{Job, Timer, TimerQueue};
