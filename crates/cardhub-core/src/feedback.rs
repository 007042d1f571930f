//! Feedback for clicks on disabled cards.
//!
//! A disabled card swallows its click, shakes for a fixed duration and asks
//! for a fixed notification. Clicking again restarts the shake with a fresh
//! clear timer; a click during a running shake switches to the alternate
//! keyframe name so the renderer plays it from the start.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::FeedbackConfig;
use crate::timer::{TimerHandle, TimerQueue};
use crate::view::{Animation, CardView};

/// Shakes disabled cards and reports the message to show.
#[derive(Debug)]
pub struct DisabledCardFeedback {
    shake: Duration,
    message: String,
    timers: TimerQueue<usize>,
    /// Clear timer and keyframe variant of each running shake.
    pending: HashMap<usize, Pending>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    clear: TimerHandle,
    replay: bool,
}

impl DisabledCardFeedback {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            shake: config.shake(),
            message: config.message.clone(),
            timers: TimerQueue::new(),
            pending: HashMap::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handle a click on card `index`.
    ///
    /// Returns the notification message when the card is disabled (the click
    /// is consumed), `None` when the card is enabled or unknown.
    pub fn on_click<C: CardView>(
        &mut self,
        cards: &mut [C],
        index: usize,
        now: Duration,
    ) -> Option<&str> {
        let card = cards.get_mut(index)?;
        if !card.is_disabled() {
            return None;
        }

        let replay = match self.pending.remove(&index) {
            Some(previous) => {
                self.timers.cancel(previous.clear);
                !previous.replay
            }
            None => false,
        };
        let animation = if replay {
            Animation::shake_replay(self.shake)
        } else {
            Animation::shake(self.shake)
        };
        card.set_animation(Some(animation));
        let clear = self.timers.schedule(now, self.shake, index);
        self.pending.insert(index, Pending { clear, replay });

        tracing::debug!(index, replay, "Disabled card clicked");
        Some(&self.message)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Clear every shake whose duration has elapsed.
    pub fn advance<C: CardView>(&mut self, cards: &mut [C], now: Duration) {
        for (handle, index) in self.timers.drain_due(now) {
            if self.pending.get(&index).map(|p| p.clear) == Some(handle) {
                self.pending.remove(&index);
            }
            if let Some(card) = cards.get_mut(index) {
                card.set_animation(None);
            }
        }
    }
}

impl Default for DisabledCardFeedback {
    fn default() -> Self {
        Self::new(&FeedbackConfig::default())
    }
}
