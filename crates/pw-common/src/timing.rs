//! Fixed timing and layout constants.
//!
//! None of these are part of the page configuration.

/// Virtual milliseconds since the page runtime started.
pub type Millis = u64;

/// Quiet period before a viewport resize is acted upon.
pub const RESIZE_DEBOUNCE_MS: Millis = 250;

/// Minimum spacing between two handled scroll events.
pub const SCROLL_THROTTLE_MS: Millis = 100;

/// Latency of the simulated form submission.
pub const SUBMIT_LATENCY_MS: Millis = 1000;

/// Viewport width at which the collapsible menu is no longer needed.
pub const WIDE_LAYOUT_MIN_WIDTH: u32 = 1024;

/// Total duration of a count-up animation.
pub const COUNT_UP_DURATION_MS: Millis = 2000;

/// Frame spacing of the count-up animation.
pub const COUNT_UP_FRAME_MS: Millis = 16;

/// How long a click ripple stays attached to its button.
pub const RIPPLE_LIFETIME_MS: Millis = 600;
