//! The interactive page: card views, tab bar, header, surface and toast
//! layer, plus one instance of every interaction component.
//!
//! Components are independent. `Page::handle` routes each event to the
//! component that owns it and collects the renderer-side [`Effects`]; the
//! only thing components share is the card collection they style.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use cardhub_core::{Catalog, InteractionConfig, Page, PageEvent, PageOptions};
//!
//! let mut page = Page::new(Catalog::builtin(), &InteractionConfig::default(), PageOptions::default());
//! let video = page.catalog().tab_index("video").unwrap();
//! page.handle(PageEvent::TabClicked(video), Duration::ZERO);
//! assert!(page.cards().iter().any(|c| !c.visible));
//! ```

use std::time::Duration;

use crate::ambient::{AmbientEffects, Viewport};
use crate::catalog::{Catalog, ALL_CATEGORY};
use crate::config::InteractionConfig;
use crate::feedback::DisabledCardFeedback;
use crate::filter::{CategoryFilter, CategoryTabs};
use crate::geometry::{Point, Rect};
use crate::keyboard::{KeyboardNavigator, NavKey};
use crate::notification::{NotificationId, NotificationPresenter, ToastLayer};
use crate::repulsion::RepulsionEngine;
use crate::reveal::{Intersection, RevealObserver};
use crate::view::{CardState, HeaderState, SurfaceState};

/// Host capabilities known when the page is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Whether the markup has a header element.
    pub has_header: bool,
    /// Whether the host can report viewport intersections.
    pub intersection_supported: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            intersection_supported: true,
        }
    }
}

/// A UI event delivered to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    TabClicked(usize),
    PointerEnter(usize),
    PointerLeave(usize),
    CardClicked(usize),
    KeyDown { index: usize, key: NavKey },
    Scroll(f64),
    PointerMove { pointer: Point, viewport: Viewport },
    VisibilityChanged { hidden: bool },
    Intersections(Vec<Intersection>),
}

/// Renderer-side actions requested while handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effects {
    /// Suppress the browser's default handling of the event.
    pub prevent_default: bool,
    /// Card that should receive focus.
    pub focus: Option<usize>,
    /// Link the activated card points to.
    pub follow: Option<String>,
}

impl Effects {
    fn merge(&mut self, other: Effects) {
        self.prevent_default |= other.prevent_default;
        self.focus = other.focus.or(self.focus);
        self.follow = other.follow.or(self.follow.take());
    }
}

pub struct Page {
    catalog: Catalog,
    cards: Vec<CardState>,
    tabs: CategoryTabs,
    header: Option<HeaderState>,
    surface: SurfaceState,
    toasts: ToastLayer,
    filter: CategoryFilter,
    repulsion: RepulsionEngine,
    keyboard: KeyboardNavigator,
    feedback: DisabledCardFeedback,
    presenter: NotificationPresenter,
    reveal: RevealObserver,
    ambient: AmbientEffects,
}

impl Page {
    /// Build the page and apply the initial "all" filter.
    pub fn new(catalog: Catalog, config: &InteractionConfig, options: PageOptions) -> Self {
        let mut cards: Vec<CardState> = catalog.cards.iter().map(CardState::from).collect();
        let tabs = CategoryTabs::new(&catalog.tabs);
        let filter = CategoryFilter;
        filter.apply(&mut cards, ALL_CATEGORY);

        if tabs.is_empty() {
            tracing::debug!("No category tabs; filtering inactive");
        }
        if !options.has_header {
            tracing::debug!("No header; scroll effect inactive");
        }
        if !cards.iter().any(|c| c.disabled) {
            tracing::debug!("No disabled cards; click feedback inactive");
        }

        let reveal = RevealObserver::new(&config.reveal, cards.len(), options.intersection_supported);
        Self {
            catalog,
            cards,
            tabs,
            header: options.has_header.then(HeaderState::default),
            surface: SurfaceState::default(),
            toasts: ToastLayer::new(),
            filter,
            repulsion: RepulsionEngine::new(&config.repulsion),
            keyboard: KeyboardNavigator,
            feedback: DisabledCardFeedback::new(&config.feedback),
            presenter: NotificationPresenter::new(&config.notification),
            reveal,
            ambient: AmbientEffects::new(&config.ambient),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn tabs(&self) -> &CategoryTabs {
        &self.tabs
    }

    pub fn header(&self) -> Option<&HeaderState> {
        self.header.as_ref()
    }

    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    pub fn toasts(&self) -> &ToastLayer {
        &self.toasts
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    /// Record a card's layout box as measured by the renderer.
    pub fn set_card_bounds(&mut self, index: usize, bounds: Rect) {
        if let Some(card) = self.cards.get_mut(index) {
            card.set_bounds(bounds);
        }
    }

    /// Host reported (late) whether intersection observation exists.
    pub fn set_intersection_supported(&mut self, supported: bool) {
        self.reveal.set_supported(supported);
    }

    /// Show a toast directly.
    pub fn notify(&mut self, message: &str, now: Duration) -> NotificationId {
        self.presenter.show(&mut self.toasts, message, now)
    }

    /// Route one event to its component.
    pub fn handle(&mut self, event: PageEvent, now: Duration) -> Effects {
        match event {
            PageEvent::TabClicked(index) => {
                if let Some(category) = self.tabs.select(index) {
                    self.filter.apply(&mut self.cards, category);
                }
                Effects::default()
            }
            PageEvent::PointerEnter(index) => {
                self.repulsion.on_enter(&mut self.cards, index);
                Effects::default()
            }
            PageEvent::PointerLeave(index) => {
                self.repulsion.on_leave(&mut self.cards, index);
                Effects::default()
            }
            PageEvent::CardClicked(index) => self.activate(index, now),
            PageEvent::KeyDown { index, key } => {
                let outcome = self.keyboard.on_key(self.cards.len(), index, key);
                let mut effects = Effects {
                    prevent_default: outcome.prevent_default,
                    focus: outcome.focus,
                    follow: None,
                };
                if let Some(target) = outcome.activate {
                    effects.merge(self.activate(target, now));
                }
                effects
            }
            PageEvent::Scroll(offset) => {
                self.ambient.on_scroll(self.header.as_mut(), offset);
                Effects::default()
            }
            PageEvent::PointerMove { pointer, viewport } => {
                self.ambient.on_pointer_move(&mut self.surface, pointer, viewport);
                Effects::default()
            }
            PageEvent::VisibilityChanged { hidden } => {
                self.ambient.on_visibility_change(&mut self.surface, hidden);
                Effects::default()
            }
            PageEvent::Intersections(entries) => {
                self.reveal.on_intersections(&mut self.cards, &entries);
                Effects::default()
            }
        }
    }

    /// Primary action of a card: disabled cards shake and notify, enabled
    /// cards follow their link.
    fn activate(&mut self, index: usize, now: Duration) -> Effects {
        if let Some(message) = self.feedback.on_click(&mut self.cards, index, now) {
            self.presenter.show(&mut self.toasts, message, now);
            return Effects {
                prevent_default: true,
                ..Effects::default()
            };
        }
        let follow = self
            .catalog
            .cards
            .get(index)
            .filter(|spec| !spec.disabled)
            .and_then(|spec| spec.link.clone());
        Effects {
            follow,
            ..Effects::default()
        }
    }

    /// Earliest pending deferred step across all components.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.presenter.next_deadline(), self.feedback.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Run every deferred step due at `now`.
    pub fn advance(&mut self, now: Duration) {
        self.feedback.advance(&mut self.cards, now);
        self.presenter.advance(&mut self.toasts, now);
    }
}
