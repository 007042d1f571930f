use cardhub_core::{Page, PageOptions};
use dioxus::prelude::*;

use crate::context::{get_launch, HubSettings, PageClock, SharedPage};
use crate::pages::Hub;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The card hub
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Hub {},
}

/// Root application component.
///
/// Provides global styles, page context, and routing.
#[component]
pub fn App() -> Element {
    let launch = use_hook(get_launch);

    // The page is built once; the bridge reports intersection support later.
    let page: SharedPage = use_signal(|| {
        Page::new(
            launch.catalog.clone(),
            &launch.config,
            PageOptions::default(),
        )
    });
    let clock = use_hook(PageClock::start);

    use_context_provider(|| page);
    use_context_provider(|| clock);
    use_context_provider(|| HubSettings::new(&launch.catalog, &launch.config));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
