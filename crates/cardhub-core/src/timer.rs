//! Deterministic queue of cancellable deferred steps.
//!
//! Page time is a `Duration` since the page started. Callers schedule a step
//! at `now + delay`, keep the returned handle, and drain whatever is due when
//! time advances. Steps fire in deadline order; steps sharing a deadline fire
//! in the order they were scheduled.

use std::time::Duration;

/// Handle to a scheduled step. Cancelling a handle that already fired or was
/// already cancelled is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: TimerHandle,
    due: Duration,
    step: T,
}

/// Cancellable deferred-step queue.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `step` to fire at `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, step: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due: now + delay,
            step,
        });
        handle
    }

    /// Cancel a pending step. Returns `true` if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return every step due at or before `now`, in firing order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<(TimerHandle, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|entry| entry.due <= now);
        self.entries = pending;
        // Handles are monotonic, so they order ties by scheduling time.
        due.sort_by_key(|entry| (entry.due, entry.handle.0));
        due.into_iter()
            .map(|entry| (entry.handle, entry.step))
            .collect()
    }
}
