//! Category tab filtering.
//!
//! A card is visible iff the active category is [`ALL_CATEGORY`] or the
//! card's whitespace-split tag set contains it. Visibility is a discrete
//! toggle; nothing is animated.

use crate::catalog::{TabSpec, ALL_CATEGORY};
use crate::view::CardView;

/// Stateless visibility pass over the card collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter;

impl CategoryFilter {
    /// Show or hide every card for `category`. Returns the visible count.
    pub fn apply<C: CardView>(&self, cards: &mut [C], category: &str) -> usize {
        let mut visible = 0;
        for card in cards.iter_mut() {
            let shown = Self::matches(card, category);
            card.set_visible(shown);
            if shown {
                visible += 1;
            }
        }
        tracing::debug!(category, visible, total = cards.len(), "Applied category filter");
        visible
    }

    /// Whether `card` is shown under `category`.
    pub fn matches<C: CardView>(card: &C, category: &str) -> bool {
        category == ALL_CATEGORY || card.has_category(category)
    }
}

/// The tab bar: one bound category per tab, at most one active.
///
/// Before the first click the tab bound to "all" (if any) is active. After
/// any successful [`CategoryTabs::select`] exactly one tab is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTabs {
    categories: Vec<String>,
    active: Option<usize>,
}

impl CategoryTabs {
    pub fn new(tabs: &[TabSpec]) -> Self {
        // A tab without a bound category filters with the empty category.
        let categories: Vec<String> = tabs
            .iter()
            .map(|tab| tab.category.clone().unwrap_or_default())
            .collect();
        let active = categories.iter().position(|c| c == ALL_CATEGORY);
        Self { categories, active }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn category(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    /// Category of the active tab, or "all" when none is active yet.
    pub fn active_category(&self) -> &str {
        self.active
            .and_then(|index| self.category(index))
            .unwrap_or(ALL_CATEGORY)
    }

    /// Deactivate every tab, activate `index`, and return its category.
    ///
    /// Out-of-range indices leave the bar untouched and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.categories.len() {
            tracing::trace!(index, "Ignoring click on unknown tab");
            return None;
        }
        self.active = Some(index);
        self.category(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CardState;

    fn cards(tags: &[Option<&str>]) -> Vec<CardState> {
        tags.iter().map(|t| CardState::new(*t, false)).collect()
    }

    fn visible(cards: &[CardState]) -> Vec<bool> {
        cards.iter().map(|c| c.visible).collect()
    }

    #[test]
    fn all_shows_every_card() {
        let mut deck = cards(&[Some("images"), None, Some("")]);
        for card in deck.iter_mut() {
            card.visible = false;
        }
        let shown = CategoryFilter.apply(&mut deck, ALL_CATEGORY);
        assert_eq!(shown, 3);
        assert_eq!(visible(&deck), vec![true, true, true]);
    }

    #[test]
    fn untagged_card_matches_only_all() {
        let mut deck = cards(&[None]);
        CategoryFilter.apply(&mut deck, "images");
        assert_eq!(visible(&deck), vec![false]);
    }

    #[test]
    fn multi_tag_card_matches_each_tag() {
        let mut deck = cards(&[Some("images video")]);
        assert_eq!(CategoryFilter.apply(&mut deck, "images"), 1);
        assert_eq!(CategoryFilter.apply(&mut deck, "video"), 1);
        assert_eq!(CategoryFilter.apply(&mut deck, "3d"), 0);
    }

    #[test]
    fn empty_category_hides_everything() {
        let mut deck = cards(&[Some("images"), None]);
        assert_eq!(CategoryFilter.apply(&mut deck, ""), 0);
    }

    #[test]
    fn tabs_start_on_all() {
        let tabs = CategoryTabs::new(&[
            TabSpec::new("Images", "images"),
            TabSpec::new("All", "all"),
        ]);
        assert_eq!(tabs.active(), Some(1));
        assert_eq!(tabs.active_category(), "all");
    }

    #[test]
    fn tabs_without_all_start_inactive() {
        let tabs = CategoryTabs::new(&[TabSpec::new("Images", "images")]);
        assert_eq!(tabs.active(), None);
        assert_eq!(tabs.active_category(), "all");
    }

    #[test]
    fn select_moves_active_tab() {
        let mut tabs = CategoryTabs::new(&[
            TabSpec::new("All", "all"),
            TabSpec::new("Video", "video"),
        ]);
        assert_eq!(tabs.select(1), Some("video"));
        assert!(tabs.is_active(1));
        assert!(!tabs.is_active(0));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut tabs = CategoryTabs::new(&[TabSpec::new("All", "all")]);
        assert_eq!(tabs.select(5), None);
        assert_eq!(tabs.active(), Some(0));
    }

    #[test]
    fn tab_without_category_binds_empty() {
        let mut tabs = CategoryTabs::new(&[TabSpec {
            label: "Odd".to_string(),
            category: None,
        }]);
        assert_eq!(tabs.select(0), Some(""));
    }
}
