//! Navigation behavior for pagewire.
//!
//! The menu is a pure state machine ([`MenuState::apply`]) plus a thin
//! adapter ([`MenuController`]) that applies entry and exit effects to the
//! document. Scroll spy and smooth anchor scrolling share the header
//! measurement.
//!
//! Controllers are attached once against a [`pw_dom::Document`]. When a
//! required element is missing, `attach` returns `Ok(None)` and the page
//! runs without that controller.

mod controller;
mod header;
mod scroll_spy;
mod selectors;
mod smooth_scroll;
mod state;

pub use controller::MenuController;
pub use header::{FALLBACK_HEADER_HEIGHT, header_height};
pub use scroll_spy::{SCROLL_SPY_OFFSET, ScrollSpy};
pub use selectors::NavSelectors;
pub use smooth_scroll::SmoothScroll;
pub use state::{MenuInput, MenuState, MenuTransition};
