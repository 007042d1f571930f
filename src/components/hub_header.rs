//! Hub header: title and subtitle, faded and lifted as the page scrolls.

use cardhub_core::{HeaderState, SurfaceState};
use dioxus::prelude::*;

/// Inline style for the header in the given state.
pub fn header_style(state: &HeaderState) -> String {
    format!(
        "transform: {}; opacity: {};",
        state.transform.to_css(),
        state.opacity
    )
}

/// Custom properties for the page surface. The stylesheet applies them to
/// the background layer (parallax offset and ambient playback).
pub fn surface_style(state: &SurfaceState) -> String {
    format!(
        "--parallax-x: {}px; --parallax-y: {}px; --ambient-play: {};",
        state.background_offset.x,
        state.background_offset.y,
        state.play_state()
    )
}

#[derive(Clone, PartialEq, Props)]
pub struct HubHeaderProps {
    pub title: String,
    #[props(default)]
    pub subtitle: String,
    pub state: HeaderState,
}

#[component]
pub fn HubHeader(props: HubHeaderProps) -> Element {
    let style = header_style(&props.state);

    rsx! {
        header {
            class: "header",
            style: "{style}",
            h1 { class: "header-title", "{props.title}" }
            if !props.subtitle.is_empty() {
                p { class: "header-subtitle", "{props.subtitle}" }
            }
        }
    }
}
