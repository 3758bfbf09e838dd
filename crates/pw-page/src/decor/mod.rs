//! Decorative collaborators.
//!
//! Single-purpose styling behaviors with no state machine of their own.
//! They run on the same document, listener and timer primitives as the
//! menu and form controllers.

mod animate;
mod count_up;
mod hover;
mod lazy_load;
mod modal;
mod ripple;
mod scroll_top;

pub use animate::{EntranceAnimator, REVEAL_THRESHOLD};
pub use count_up::{COUNT_UP_THRESHOLD, CountUp};
pub use hover::{HoverStyle, apply_hover};
pub use lazy_load::apply_lazy_loading;
pub use modal::{OpenModal, PRIVACY_MODAL_HREF, PrivacyModal};
pub use ripple::{expire_ripple, spawn_ripple};
pub use scroll_top::{SHOW_AFTER_SCROLL_Y, ScrollTop};
