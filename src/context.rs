//! Page context for Card Hub.
//!
//! The whole interactive state lives in one [`Page`] held in a signal and
//! shared with every component through `use_context`, next to a
//! monotonic clock that turns wall time into page time for the timers.
//!
//! ## Usage
//!
//! ```ignore
//! let mut page = use_page();
//! let clock = use_page_clock();
//!
//! page.write().handle(PageEvent::CardClicked(index), clock.now());
//! ```

use std::time::{Duration, Instant};

use cardhub_core::{Catalog, InteractionConfig, Page};
use dioxus::prelude::*;

pub use crate::Launch;

/// Get the catalog and tuning resolved at startup.
pub fn get_launch() -> Launch {
    crate::get_launch()
}

/// Shared page type for context.
pub type SharedPage = Signal<Page>;

/// Maps wall time onto page time (time since the page was built).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageClock {
    start: Instant,
}

impl PageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Page time elapsed so far.
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Interaction tuning, provided separately so the bridge can read
/// thresholds without borrowing the page.
#[derive(Debug, Clone, PartialEq)]
pub struct HubSettings {
    pub catalog_title: String,
    pub catalog_subtitle: String,
    pub config: InteractionConfig,
}

impl HubSettings {
    pub fn new(catalog: &Catalog, config: &InteractionConfig) -> Self {
        Self {
            catalog_title: catalog.title.clone(),
            catalog_subtitle: catalog.subtitle.clone(),
            config: config.clone(),
        }
    }
}

/// Hook to access the page from context.
pub fn use_page() -> SharedPage {
    use_context::<SharedPage>()
}

/// Hook to access the page clock.
pub fn use_page_clock() -> PageClock {
    use_context::<PageClock>()
}

/// Hook to access the startup settings.
pub fn use_settings() -> HubSettings {
    use_context::<HubSettings>()
}
