//! Shared timing primitives for pagewire.
//!
//! Provides:
//! - `Debouncer` - Fires once after input activity quiesces
//! - `Throttle` - Fires at most once per interval, leading call honored
//! - `timing` - Fixed delays and layout thresholds used by the controllers
//!
//! All time is expressed as virtual milliseconds (`Millis`). The page
//! runtime owns the clock and asks the limiters whether a call may run,
//! so nothing here sleeps or spawns.

mod debounce;
mod throttle;
pub mod timing;

pub use debounce::Debouncer;
pub use throttle::Throttle;
pub use timing::Millis;
