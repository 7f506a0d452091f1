//! Cancellable timers on a virtual clock.
//!
//! The storefront is single-threaded: timers never fire on their own. The
//! owner advances the clock and receives every task that came due, in due
//! order, within the same call.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Pending tasks ordered by due time, then scheduling order.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: BTreeMap<(Duration, TimerHandle), T>,
    next_handle: u64,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_handle: 0,
        }
    }

    /// Schedule `task` to fire at `due`.
    pub fn schedule(&mut self, due: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.insert((due, handle), task);
        handle
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self.pending.keys().find(|(_, h)| *h == handle).copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Remove and return every task due at or before `now`.
    pub fn take_due(&mut self, now: Duration) -> Vec<(Duration, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((at, _), task) = entry.remove_entry();
            due.push((at, task));
        }
        due
    }

    /// When the earliest pending task is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(at, _)| *at)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(secs(5), "late");
        timers.schedule(secs(1), "early");
        timers.schedule(secs(1), "early-second");

        assert_eq!(timers.next_due(), Some(secs(1)));
        let fired: Vec<&str> = timers.take_due(secs(3)).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec!["early", "early-second"]);
        assert_eq!(timers.len(), 1);

        assert!(timers.take_due(secs(4)).is_empty());
        assert_eq!(timers.take_due(secs(5)), vec![(secs(5), "late")]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerQueue::new();
        let first = timers.schedule(secs(3), 1);
        timers.schedule(secs(5), 2);

        assert!(timers.cancel(first));
        assert!(!timers.cancel(first));
        assert_eq!(timers.take_due(secs(10)), vec![(secs(5), 2)]);
    }
}
