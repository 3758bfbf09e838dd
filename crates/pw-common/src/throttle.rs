//! Leading-edge throttle.

use crate::timing::Millis;

/// Lets a call through at most once per `interval_ms`.
///
/// The first call of an idle period runs immediately and opens a
/// cooldown window. Calls inside the window are dropped; there is no
/// trailing call.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: Millis,
    cooldown_until: Option<Millis>,
}

impl Throttle {
    /// Create a throttle with the given interval.
    pub fn new(interval_ms: Millis) -> Self {
        Self {
            interval_ms,
            cooldown_until: None,
        }
    }

    /// Interval in milliseconds.
    #[inline]
    pub fn interval_ms(&self) -> Millis {
        self.interval_ms
    }

    /// Check if a call at `now` would be dropped.
    pub fn is_cooling_down(&self, now: Millis) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    /// Register a call at `now`. Returns `true` if it should run.
    pub fn call(&mut self, now: Millis) -> bool {
        if self.is_cooling_down(now) {
            return false;
        }
        self.cooldown_until = Some(now.saturating_add(self.interval_ms));
        true
    }

    /// Like [`Throttle::call`], passing the arguments through when allowed.
    pub fn admit<A>(&mut self, now: Millis, args: A) -> Option<A> {
        self.call(now).then_some(args)
    }
}
