//! Virtual-time timer queue.

use pw_common::Millis;
use pw_dom::NodeId;
use serde::Serialize;

/// Work a timer performs when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Job {
    /// Poll the debounced menu resize handler.
    MenuResize,
    /// Finish the in-flight submission of a form.
    SubmissionComplete { form: usize },
    /// Remove a ripple element.
    RippleExpire { ripple: NodeId },
    /// Advance one count-up animation by a frame.
    CountUpFrame { counter: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timer {
    pub id: u64,
    pub due_at: Millis,
    pub job: Job,
}

/// Pending timers, fired in `(due_at, scheduling order)` order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_at: Millis, job: Job) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer { id, due_at, job });
        id
    }

    pub fn cancel(&mut self, id: u64) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    /// Remove and return the next timer due at or before `until`.
    pub fn pop_due(&mut self, until: Millis) -> Option<Timer> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_at <= until)
            .min_by_key(|(_, timer)| (timer.due_at, timer.id))
            .map(|(index, _)| index)?;
        Some(self.timers.remove(index))
    }

    /// Earliest deadline.
    pub fn next_due(&self) -> Option<Millis> {
        self.timers.iter().map(|timer| timer.due_at).min()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Timer> {
        self.timers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, Job::MenuResize);
        queue.schedule(100, Job::SubmissionComplete { form: 0 });
        queue.schedule(100, Job::CountUpFrame { counter: 1 });

        assert_eq!(queue.next_due(), Some(100));
        assert_eq!(
            queue.pop_due(1000).map(|t| t.job),
            Some(Job::SubmissionComplete { form: 0 })
        );
        assert_eq!(
            queue.pop_due(1000).map(|t| t.job),
            Some(Job::CountUpFrame { counter: 1 })
        );
        assert!(queue.pop_due(299).is_none());
        assert_eq!(queue.pop_due(300).map(|t| t.job), Some(Job::MenuResize));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(10, Job::MenuResize);
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.is_empty());
    }
}
