//! Transient toast notifications.
//!
//! `show` evicts whatever toast is on screen, inserts a new one hidden above
//! the viewport, slides it in one tick later, slides it out after the hold
//! and removes it once the exit transition has finished. Every deferred step
//! is a cancellable timer owned by the presenter, so a superseded toast's
//! pending steps never touch the surface.

use std::time::Duration;

use crate::config::NotificationConfig;
use crate::timer::{TimerHandle, TimerQueue};

/// Identifies one toast instance.
pub type NotificationId = u64;

/// Where toasts are rendered.
pub trait NotificationSurface {
    /// Insert a toast in its hidden (off-screen) position.
    fn insert(&mut self, id: NotificationId, message: &str);

    /// Slide a toast in (`true`) or out (`false`). Returns `false` if the
    /// toast is no longer present.
    fn set_shown(&mut self, id: NotificationId, shown: bool) -> bool;

    /// Remove a toast. Returns `false` if it was already gone.
    fn remove(&mut self, id: NotificationId) -> bool;
}

/// One toast element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: NotificationId,
    pub message: String,
    /// Slid into view.
    pub shown: bool,
}

/// In-memory toast surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastLayer {
    toasts: Vec<Toast>,
}

impl ToastLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Most recently inserted toast.
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl NotificationSurface for ToastLayer {
    fn insert(&mut self, id: NotificationId, message: &str) {
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            shown: false,
        });
    }

    fn set_shown(&mut self, id: NotificationId, shown: bool) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.shown = shown;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    SlideIn(NotificationId),
    SlideOut(NotificationId),
    Remove(NotificationId),
}

#[derive(Debug)]
struct Active {
    id: NotificationId,
    steps: [TimerHandle; 3],
}

/// Drives the toast lifecycle on a [`NotificationSurface`].
#[derive(Debug)]
pub struct NotificationPresenter {
    enter_delay: Duration,
    hold: Duration,
    exit: Duration,
    timers: TimerQueue<Step>,
    active: Option<Active>,
    next_id: NotificationId,
}

impl NotificationPresenter {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            enter_delay: config.enter_delay(),
            hold: config.hold(),
            exit: config.exit(),
            timers: TimerQueue::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Toast currently owned by the presenter.
    pub fn active(&self) -> Option<NotificationId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Show `message`, replacing any toast on screen.
    pub fn show<S: NotificationSurface>(
        &mut self,
        surface: &mut S,
        message: &str,
        now: Duration,
    ) -> NotificationId {
        if let Some(previous) = self.active.take() {
            for handle in previous.steps {
                self.timers.cancel(handle);
            }
            surface.remove(previous.id);
            tracing::debug!(id = previous.id, "Evicted previous notification");
        }

        let id = self.next_id;
        self.next_id += 1;
        surface.insert(id, message);

        let steps = [
            self.timers.schedule(now, self.enter_delay, Step::SlideIn(id)),
            self.timers.schedule(now, self.hold, Step::SlideOut(id)),
            self.timers.schedule(now, self.hold + self.exit, Step::Remove(id)),
        ];
        self.active = Some(Active { id, steps });
        tracing::debug!(id, message, "Showing notification");
        id
    }

    /// Earliest pending lifecycle step.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Run every lifecycle step due at `now`.
    pub fn advance<S: NotificationSurface>(&mut self, surface: &mut S, now: Duration) {
        for (_, step) in self.timers.drain_due(now) {
            match step {
                Step::SlideIn(id) => {
                    surface.set_shown(id, true);
                }
                Step::SlideOut(id) => {
                    surface.set_shown(id, false);
                }
                Step::Remove(id) => {
                    if !surface.remove(id) {
                        tracing::debug!(id, "Notification already removed");
                    }
                    if self.active() == Some(id) {
                        self.active = None;
                    }
                }
            }
        }
    }
}

impl Default for NotificationPresenter {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn lifecycle_runs_to_removal() {
        let mut layer = ToastLayer::new();
        let mut presenter = NotificationPresenter::default();

        let id = presenter.show(&mut layer, "hello", ms(0));
        assert_eq!(layer.current().map(|t| t.shown), Some(false));

        presenter.advance(&mut layer, ms(10));
        assert_eq!(layer.current().map(|t| t.shown), Some(true));

        presenter.advance(&mut layer, ms(2999));
        assert_eq!(layer.current().map(|t| t.shown), Some(true));

        presenter.advance(&mut layer, ms(3000));
        assert_eq!(layer.current().map(|t| t.shown), Some(false));
        assert_eq!(presenter.active(), Some(id));

        presenter.advance(&mut layer, ms(3500));
        assert!(layer.is_empty());
        assert_eq!(presenter.active(), None);
        assert_eq!(presenter.next_deadline(), None);
    }

    #[test]
    fn second_show_evicts_first() {
        let mut layer = ToastLayer::new();
        let mut presenter = NotificationPresenter::default();

        presenter.show(&mut layer, "first", ms(0));
        presenter.advance(&mut layer, ms(10));
        let second = presenter.show(&mut layer, "second", ms(100));

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.current().map(|t| t.message.as_str()), Some("second"));

        // The first toast's removal at 3500 must not take the second one down.
        presenter.advance(&mut layer, ms(3500));
        assert_eq!(layer.len(), 1);
        assert_eq!(presenter.active(), Some(second));

        presenter.advance(&mut layer, ms(3600));
        assert!(layer.is_empty());
    }

    #[test]
    fn removal_of_missing_toast_is_guarded() {
        let mut layer = ToastLayer::new();
        let mut presenter = NotificationPresenter::default();

        let id = presenter.show(&mut layer, "gone", ms(0));
        assert!(layer.remove(id));
        presenter.advance(&mut layer, ms(10_000));
        assert!(layer.is_empty());
        assert_eq!(presenter.active(), None);
    }

    #[test]
    fn layer_reports_missing_ids() {
        let mut layer = ToastLayer::new();
        assert!(!layer.set_shown(7, true));
        assert!(!layer.remove(7));
    }
}
