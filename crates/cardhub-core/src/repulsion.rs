//! Hover repulsion between cards.
//!
//! Hovering card A pushes every other enabled card B that lies within
//! `radius` of A (measured between top-left corners) directly away from A.
//! The push decays linearly from `strength` at distance zero to nothing at
//! `radius`. Leaving A clears every offset. Disabled cards neither push nor
//! get pushed.
//!
//! Offsets are recomputed from the current layout on every enter, so with
//! overlapping hovers the last enter wins.

use crate::config::RepulsionConfig;
use crate::geometry::{Point, Translation};
use crate::view::CardView;

/// Push applied to a card at `to` when the card at `from` is hovered.
///
/// Returns `None` when `to` is at or beyond `radius`. Coincident corners
/// give `atan2(0, 0) = 0`, a push of `strength` along +x.
pub fn push_between(from: Point, to: Point, radius: f64, strength: f64) -> Option<Translation> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= radius {
        return None;
    }
    let angle = dy.atan2(dx);
    let push = ((radius - distance) / radius).max(0.0) * strength;
    Some(Translation::new(angle.cos() * push, angle.sin() * push))
}

/// Applies and clears repulsion offsets on hover enter/leave.
#[derive(Debug, Clone)]
pub struct RepulsionEngine {
    radius: f64,
    strength: f64,
    hovered: Option<usize>,
}

impl RepulsionEngine {
    pub fn new(config: &RepulsionConfig) -> Self {
        Self {
            radius: config.radius,
            strength: config.strength,
            hovered: None,
        }
    }

    /// Card currently treated as the hover source.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer entered card `index`. Returns how many cards were pushed.
    pub fn on_enter<C: CardView>(&mut self, cards: &mut [C], index: usize) -> usize {
        let Some(source) = cards.get(index) else {
            tracing::trace!(index, "Ignoring hover on unknown card");
            return 0;
        };
        if source.is_disabled() {
            return 0;
        }
        let origin = source.bounds().origin();
        self.hovered = Some(index);

        let mut pushed = 0;
        for (other_index, other) in cards.iter_mut().enumerate() {
            if other_index == index || other.is_disabled() {
                continue;
            }
            let target = other.bounds().origin();
            if let Some(offset) = push_between(origin, target, self.radius, self.strength) {
                other.set_transform(Some(offset));
                pushed += 1;
            }
        }
        tracing::debug!(index, pushed, "Applied hover repulsion");
        pushed
    }

    /// Pointer left card `index`: every other enabled card returns to its
    /// default transform.
    pub fn on_leave<C: CardView>(&mut self, cards: &mut [C], index: usize) {
        match cards.get(index) {
            Some(source) if !source.is_disabled() => {}
            _ => return,
        }
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        for (other_index, other) in cards.iter_mut().enumerate() {
            if other_index != index && !other.is_disabled() {
                other.set_transform(None);
            }
        }
    }
}

impl Default for RepulsionEngine {
    fn default() -> Self {
        Self::new(&RepulsionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::view::CardState;

    fn card_at(left: f64, top: f64) -> CardState {
        CardState::at(None, false, Rect::new(left, top, 200.0, 150.0))
    }

    #[test]
    fn push_at_100_units_is_three_point_seven_five() {
        let offset = push_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 400.0, 5.0).unwrap();
        assert!((offset.x - 3.75).abs() < 1e-9);
        assert!(offset.y.abs() < 1e-9);
    }

    #[test]
    fn push_follows_direction() {
        let offset = push_between(Point::new(0.0, 0.0), Point::new(60.0, 80.0), 400.0, 5.0).unwrap();
        // distance 100, push 3.75 along (0.6, 0.8)
        assert!((offset.x - 2.25).abs() < 1e-9);
        assert!((offset.y - 3.0).abs() < 1e-9);
        assert!((offset.magnitude() - 3.75).abs() < 1e-9);
    }

    #[test]
    fn no_push_at_radius() {
        assert!(push_between(Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400.0, 5.0).is_none());
        assert!(push_between(Point::new(0.0, 0.0), Point::new(0.0, 401.0), 400.0, 5.0).is_none());
    }

    #[test]
    fn coincident_cards_push_along_x() {
        let offset = push_between(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 400.0, 5.0).unwrap();
        assert_eq!(offset, Translation::new(5.0, 0.0));
    }

    #[test]
    fn enter_skips_hovered_and_distant_cards() {
        let mut cards = vec![card_at(0.0, 0.0), card_at(100.0, 0.0), card_at(1000.0, 0.0)];
        let mut engine = RepulsionEngine::default();

        assert_eq!(engine.on_enter(&mut cards, 0), 1);
        assert_eq!(cards[0].transform, None);
        assert!(cards[1].transform.is_some());
        assert_eq!(cards[2].transform, None);
        assert_eq!(engine.hovered(), Some(0));
    }

    #[test]
    fn disabled_cards_neither_push_nor_move() {
        let mut cards = vec![
            card_at(0.0, 0.0),
            CardState::at(None, true, Rect::new(50.0, 0.0, 200.0, 150.0)),
        ];
        let mut engine = RepulsionEngine::default();

        assert_eq!(engine.on_enter(&mut cards, 0), 0);
        assert_eq!(cards[1].transform, None);

        assert_eq!(engine.on_enter(&mut cards, 1), 0);
        assert_eq!(cards[0].transform, None);
        assert_eq!(engine.hovered(), Some(0));
    }

    #[test]
    fn leave_clears_all_offsets() {
        let mut cards = vec![card_at(0.0, 0.0), card_at(100.0, 0.0), card_at(0.0, 100.0)];
        let mut engine = RepulsionEngine::default();

        engine.on_enter(&mut cards, 0);
        engine.on_leave(&mut cards, 0);
        assert!(cards.iter().all(|c| c.transform.is_none()));
        assert_eq!(engine.hovered(), None);
    }

    #[test]
    fn last_enter_wins() {
        let mut cards = vec![card_at(0.0, 0.0), card_at(100.0, 0.0), card_at(200.0, 0.0)];
        let mut engine = RepulsionEngine::default();

        engine.on_enter(&mut cards, 0);
        engine.on_enter(&mut cards, 2);
        // card 1 is now pushed away from card 2 (towards -x)
        let offset = cards[1].transform.unwrap();
        assert!(offset.x < 0.0);
        assert_eq!(engine.hovered(), Some(2));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut cards = vec![card_at(0.0, 0.0)];
        let mut engine = RepulsionEngine::default();
        assert_eq!(engine.on_enter(&mut cards, 9), 0);
        engine.on_leave(&mut cards, 9);
        assert_eq!(engine.hovered(), None);
    }
}
