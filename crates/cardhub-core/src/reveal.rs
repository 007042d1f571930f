//! Fade-in of cards as they scroll into view.
//!
//! Each card is revealed at most once: the first time its intersection ratio
//! exceeds the threshold it becomes fully opaque and loses its vertical
//! entrance offset. Leaving the viewport does not hide it again. Without
//! intersection support the observer does nothing and cards keep their
//! stylesheet appearance.

use crate::config::RevealConfig;
use crate::view::CardView;

/// One intersection report for a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub index: usize,
    pub ratio: f64,
}

impl Intersection {
    pub const fn new(index: usize, ratio: f64) -> Self {
        Self { index, ratio }
    }
}

#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    supported: bool,
    revealed: Vec<bool>,
}

impl RevealObserver {
    /// Observe `len` cards. `supported` is false when the host has no
    /// intersection observation.
    pub fn new(config: &RevealConfig, len: usize, supported: bool) -> Self {
        if !supported {
            tracing::debug!("Intersection observation unavailable; reveal disabled");
        }
        Self {
            threshold: config.threshold,
            supported,
            revealed: vec![false; len],
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Switch support on or off once the host reports its capabilities.
    pub fn set_supported(&mut self, supported: bool) {
        self.supported = supported;
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Apply a batch of intersection reports. Returns how many cards were
    /// newly revealed.
    pub fn on_intersections<C: CardView>(
        &mut self,
        cards: &mut [C],
        entries: &[Intersection],
    ) -> usize {
        if !self.supported {
            return 0;
        }
        let mut newly = 0;
        for entry in entries {
            if entry.ratio <= self.threshold {
                continue;
            }
            let (Some(card), Some(seen)) =
                (cards.get_mut(entry.index), self.revealed.get_mut(entry.index))
            else {
                tracing::trace!(index = entry.index, "Ignoring intersection for unknown card");
                continue;
            };
            if *seen {
                continue;
            }
            *seen = true;
            card.set_opacity(Some(1.0));
            card.set_transform(None);
            newly += 1;
        }
        newly
    }
}
