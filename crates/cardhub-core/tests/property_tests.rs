//! Property-based tests for the interaction components
//!
//! Uses proptest to check the page invariants over arbitrary decks, layouts
//! and event sequences.

use std::time::Duration;

use cardhub_core::{
    push_between, CardSpec, CardState, Catalog, CategoryFilter, InteractionConfig,
    KeyboardNavigator, NavKey, Page, PageEvent, PageOptions, Point, Rect, RepulsionEngine,
    TabSpec, ALL_CATEGORY,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const TAGS: [&str; 5] = ["images", "video", "3d", "ui", "audio"];

/// Optional space-separated tag attribute drawn from a small vocabulary
fn tags_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::collection::vec(prop::sample::select(TAGS.to_vec()), 0..4)
            .prop_map(|tags| tags.join(" ")),
    )
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(ALL_CATEGORY.to_string()),
        4 => prop::sample::select(TAGS.to_vec()).prop_map(str::to_string),
    ]
}

/// Card with a layout box somewhere on a 2000x2000 page
fn card_strategy() -> impl Strategy<Value = CardState> {
    (tags_strategy(), any::<bool>(), 0.0..2000.0f64, 0.0..2000.0f64).prop_map(
        |(tags, disabled, left, top)| {
            CardState::at(tags.as_deref(), disabled, Rect::new(left, top, 200.0, 150.0))
        },
    )
}

fn nav_key_strategy() -> impl Strategy<Value = NavKey> {
    prop::sample::select(vec![
        NavKey::Enter,
        NavKey::Space,
        NavKey::ArrowRight,
        NavKey::ArrowDown,
        NavKey::ArrowLeft,
        NavKey::ArrowUp,
        NavKey::Other,
    ])
}

fn tabbed_catalog(tab_categories: &[String], card_tags: &[Option<String>]) -> Catalog {
    Catalog {
        title: "Props".to_string(),
        subtitle: String::new(),
        tabs: tab_categories
            .iter()
            .map(|c| TabSpec::new(c.clone(), c.clone()))
            .collect(),
        cards: card_tags
            .iter()
            .enumerate()
            .map(|(i, tags)| CardSpec::new(format!("card {}", i), tags.as_deref()))
            .collect(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// visible <=> category is "all" or the card carries the category
    #[test]
    fn filter_visibility_matches_tags(
        mut cards in prop::collection::vec(card_strategy(), 0..20),
        category in category_strategy(),
    ) {
        let shown = CategoryFilter.apply(&mut cards, &category);

        let mut expected_shown = 0;
        for card in &cards {
            let tagged = card
                .categories
                .as_deref()
                .map(|raw| raw.split_whitespace().any(|t| t == category))
                .unwrap_or(false);
            let expected = category == ALL_CATEGORY || tagged;
            prop_assert_eq!(card.visible, expected);
            if expected {
                expected_shown += 1;
            }
        }
        prop_assert_eq!(shown, expected_shown);
    }

    /// Exactly one tab is active after any non-empty sequence of clicks
    #[test]
    fn exactly_one_active_tab(
        tabs in prop::collection::vec(category_strategy(), 1..6),
        clicks in prop::collection::vec(0..6usize, 1..30),
    ) {
        let mut page = Page::new(
            tabbed_catalog(&tabs, &[]),
            &InteractionConfig::default(),
            PageOptions::default(),
        );
        let mut clicked_any = false;
        for click in clicks {
            page.handle(PageEvent::TabClicked(click), Duration::ZERO);
            clicked_any |= click < tabs.len();
            if clicked_any {
                let active = (0..tabs.len()).filter(|&i| page.tabs().is_active(i)).count();
                prop_assert_eq!(active, 1);
            }
        }
    }

    /// Page visibility always agrees with the active tab's category
    #[test]
    fn page_visibility_tracks_active_tab(
        tabs in prop::collection::vec(category_strategy(), 1..6),
        card_tags in prop::collection::vec(tags_strategy(), 0..12),
        clicks in prop::collection::vec(0..6usize, 0..20),
    ) {
        let mut page = Page::new(
            tabbed_catalog(&tabs, &card_tags),
            &InteractionConfig::default(),
            PageOptions::default(),
        );
        for click in clicks {
            page.handle(PageEvent::TabClicked(click), Duration::ZERO);
        }
        let category = page.tabs().active_category().to_string();
        for card in page.cards() {
            prop_assert_eq!(card.visible, CategoryFilter::matches(card, &category));
        }
    }

    /// Push magnitude never exceeds strength and vanishes outside the radius
    #[test]
    fn push_is_bounded(
        ax in -1000.0..1000.0f64, ay in -1000.0..1000.0f64,
        bx in -1000.0..1000.0f64, by in -1000.0..1000.0f64,
    ) {
        let from = Point::new(ax, ay);
        let to = Point::new(bx, by);
        let distance = ((bx - ax) * (bx - ax) + (by - ay) * (by - ay)).sqrt();
        match push_between(from, to, 400.0, 5.0) {
            Some(offset) => {
                prop_assert!(distance < 400.0);
                prop_assert!(offset.magnitude() <= 5.0 + 1e-9);
                let expected = (400.0 - distance) / 400.0 * 5.0;
                prop_assert!((offset.magnitude() - expected).abs() < 1e-6);
            }
            None => prop_assert!(distance >= 400.0),
        }
    }

    /// Cards out of range of the hovered card keep their transform
    #[test]
    fn distant_cards_are_untouched(
        mut cards in prop::collection::vec(card_strategy(), 1..15),
        hovered in 0..15usize,
    ) {
        let hovered = hovered % cards.len();
        let origin = cards[hovered].bounds.origin();
        let before: Vec<_> = cards.iter().map(|c| c.transform).collect();

        RepulsionEngine::default().on_enter(&mut cards, hovered);

        for (i, card) in cards.iter().enumerate() {
            let dx = card.bounds.left - origin.x;
            let dy = card.bounds.top - origin.y;
            let far = (dx * dx + dy * dy).sqrt() >= 400.0;
            if i == hovered || far || card.disabled {
                prop_assert_eq!(card.transform, before[i]);
            }
        }
    }

    /// After leave, every other enabled card is back to its default transform
    #[test]
    fn leave_always_clears(
        mut cards in prop::collection::vec(card_strategy(), 1..15),
        sequence in prop::collection::vec(0..15usize, 1..10),
    ) {
        let mut engine = RepulsionEngine::default();
        let mut last = 0;
        for index in sequence {
            last = index % cards.len();
            engine.on_enter(&mut cards, last);
        }
        engine.on_leave(&mut cards, last);

        if !cards[last].disabled {
            for (i, card) in cards.iter().enumerate() {
                if i != last && !card.disabled {
                    prop_assert_eq!(card.transform, None);
                }
            }
        }
    }

    /// Keyboard focus never leaves [0, N-1]
    #[test]
    fn focus_stays_in_bounds(
        len in 1..30usize,
        start in 0..30usize,
        keys in prop::collection::vec(nav_key_strategy(), 0..60),
    ) {
        let mut focused = start % len;
        for key in keys {
            let outcome = KeyboardNavigator.on_key(len, focused, key);
            if let Some(next) = outcome.focus {
                prop_assert!(next < len);
                prop_assert!(next.abs_diff(focused) <= 1);
                focused = next;
            }
        }
    }

    /// Any burst of notifications leaves at most one toast at every instant
    #[test]
    fn at_most_one_toast(
        show_times in prop::collection::vec(0..5000u64, 1..10),
    ) {
        let mut page = Page::new(Catalog::builtin(), &InteractionConfig::default(), PageOptions::default());
        let mut show_times = show_times;
        show_times.sort_unstable();

        let mut next_show = 0;
        for t in (0..=9000u64).step_by(5) {
            while next_show < show_times.len() && show_times[next_show] <= t {
                page.notify(&format!("message {}", next_show), Duration::from_millis(t));
                next_show += 1;
            }
            page.advance(Duration::from_millis(t));
            prop_assert!(page.toasts().len() <= 1);
        }
        prop_assert!(page.toasts().is_empty());
    }
}
