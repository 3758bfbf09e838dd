//! Trailing-edge debounce.

use crate::timing::Millis;

/// Defers a call until no further calls arrive for `delay_ms`.
///
/// Every `call` replaces the pending arguments and pushes the deadline
/// out again, so only the last call of a burst is ever delivered. If calls
/// never stop arriving, nothing is delivered.
#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    delay_ms: Millis,
    pending: Option<Pending<A>>,
}

#[derive(Debug, Clone)]
struct Pending<A> {
    due_at: Millis,
    args: A,
}

impl<A> Debouncer<A> {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay_ms: Millis) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Quiet period in milliseconds.
    #[inline]
    pub fn delay_ms(&self) -> Millis {
        self.delay_ms
    }

    /// Record a call at `now`, replacing any pending one.
    ///
    /// Returns the new deadline; the caller should poll again at that time.
    pub fn call(&mut self, now: Millis, args: A) -> Millis {
        let due_at = now.saturating_add(self.delay_ms);
        self.pending = Some(Pending { due_at, args });
        due_at
    }

    /// Deadline of the pending call, if any.
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Check if a call is waiting for its quiet period.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending arguments once the quiet period has elapsed.
    ///
    /// Returns `None` before the deadline, which is what a stale timer
    /// scheduled for an earlier, superseded call will see.
    pub fn poll(&mut self, now: Millis) -> Option<A> {
        match &self.pending {
            Some(pending) if now >= pending.due_at => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// Drop the pending call without delivering it.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_call_fires_after_delay() {
        let mut debouncer = Debouncer::new(250);
        assert_eq!(debouncer.call(0, "a"), 250);

        assert_eq!(debouncer.poll(249), None);
        assert_eq!(debouncer.poll(250), Some("a"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_burst_delivers_last_args_once() {
        let mut debouncer = Debouncer::new(250);
        debouncer.call(0, 1);
        debouncer.call(100, 2);
        debouncer.call(200, 3);

        // The timer scheduled by the first call is stale
        assert_eq!(debouncer.poll(250), None);
        assert_eq!(debouncer.poll(450), Some(3));
        assert_eq!(debouncer.poll(1000), None);
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(10);
        debouncer.call(0, "x");
        assert_eq!(debouncer.cancel(), Some("x"));
        assert_eq!(debouncer.poll(100), None);
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn test_continuous_calls_starve() {
        let mut debouncer = Debouncer::new(250);
        for now in (0..5000).step_by(100) {
            debouncer.call(now, now);
            assert_eq!(debouncer.poll(now), None);
        }
        assert!(debouncer.is_pending());
    }
}
