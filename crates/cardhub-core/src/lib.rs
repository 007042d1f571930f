//! Card Hub Core Library
//!
//! Renderer-independent interaction engine for a filterable card grid.
//!
//! ## Overview
//!
//! A hub page shows a grid of tool cards under a row of category tabs. Every
//! interaction is a direct reaction to one UI event:
//!
//! - **Filtering**: clicking a tab shows only the cards tagged with it
//! - **Repulsion**: hovering a card nudges its neighbours away from it
//! - **Keyboard**: arrows move focus across cards, Enter/Space activate
//! - **Feedback**: disabled cards shake and raise a "coming soon" toast
//! - **Reveal**: cards fade in the first time they scroll into view
//! - **Ambient**: the header fades on scroll, the background follows the pointer
//!
//! Components write visual state through the [`CardView`] family of traits
//! and never call each other. [`Page`] owns one of each and routes events.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use cardhub_core::{Catalog, InteractionConfig, Page, PageEvent, PageOptions};
//!
//! let mut page = Page::new(Catalog::builtin(), &InteractionConfig::default(), PageOptions::default());
//!
//! // Click a disabled card: it shakes and a toast appears.
//! let disabled = page.cards().iter().position(|c| c.disabled).unwrap();
//! let effects = page.handle(PageEvent::CardClicked(disabled), Duration::ZERO);
//! assert!(effects.prevent_default);
//! assert_eq!(page.toasts().len(), 1);
//!
//! // Three and a half seconds later everything has settled.
//! page.advance(Duration::from_millis(3500));
//! assert!(page.toasts().is_empty());
//! ```

pub mod ambient;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod geometry;
pub mod keyboard;
pub mod logging;
pub mod notification;
pub mod page;
pub mod repulsion;
pub mod reveal;
pub mod timer;
pub mod view;

// Re-exports
pub use ambient::{AmbientEffects, Viewport};
pub use catalog::{CardSpec, Catalog, TabSpec, ALL_CATEGORY};
pub use config::InteractionConfig;
pub use error::{HubError, HubResult};
pub use feedback::DisabledCardFeedback;
pub use filter::{CategoryFilter, CategoryTabs};
pub use geometry::{Point, Rect, Translation};
pub use keyboard::{KeyOutcome, KeyboardNavigator, NavKey};
pub use notification::{
    NotificationId, NotificationPresenter, NotificationSurface, Toast, ToastLayer,
};
pub use page::{Effects, Page, PageEvent, PageOptions};
pub use repulsion::{push_between, RepulsionEngine};
pub use reveal::{Intersection, RevealObserver};
pub use timer::{TimerHandle, TimerQueue};
pub use view::{
    Animation, CardState, CardView, HeaderState, HeaderView, SurfaceState, SurfaceView,
};
