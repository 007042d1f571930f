//! Card Tile Component
//!
//! One focusable tool card. Visual state (display, offset, opacity, shake)
//! comes from a [`CardState`]; every interaction is reported upward by index.

use std::rc::Rc;

use cardhub_core::{CardSpec, CardState, NavKey};
use dioxus::prelude::*;

/// Inline style for a card in the given state.
pub fn card_style(state: &CardState) -> String {
    let mut style = String::from(if state.visible {
        "display: flex;"
    } else {
        "display: none;"
    });
    if let Some(offset) = state.transform {
        style.push_str(&format!(" transform: {};", offset.to_css()));
    }
    if let Some(opacity) = state.opacity {
        style.push_str(&format!(" opacity: {};", opacity));
    }
    if let Some(animation) = state.animation {
        style.push_str(&format!(" animation: {};", animation.to_css()));
    }
    style
}

/// CSS class list for a card. `revealed` lifts the stylesheet entrance offset.
pub fn card_class(disabled: bool, revealed: bool) -> &'static str {
    match (disabled, revealed) {
        (false, false) => "card",
        (false, true) => "card revealed",
        (true, false) => "card card-disabled",
        (true, true) => "card card-disabled revealed",
    }
}

/// Map a Dioxus key to the navigator's key set.
pub fn nav_key(key: &Key) -> NavKey {
    match key {
        Key::Enter => NavKey::Enter,
        Key::ArrowRight => NavKey::ArrowRight,
        Key::ArrowDown => NavKey::ArrowDown,
        Key::ArrowLeft => NavKey::ArrowLeft,
        Key::ArrowUp => NavKey::ArrowUp,
        Key::Character(c) => NavKey::from_key_name(c),
        _ => NavKey::Other,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CardTileProps {
    /// Position in document order
    pub index: usize,
    pub spec: CardSpec,
    pub state: CardState,
    /// Whether the card has already scrolled into view
    #[props(default)]
    pub revealed: bool,
    pub on_enter: EventHandler<usize>,
    pub on_leave: EventHandler<usize>,
    pub on_click: EventHandler<usize>,
    pub on_key: EventHandler<(usize, NavKey)>,
    /// Receives the mounted element so the page can measure and focus it
    pub on_mounted: EventHandler<(usize, Rc<MountedData>)>,
}

#[component]
pub fn CardTile(props: CardTileProps) -> Element {
    let index = props.index;
    let style = card_style(&props.state);
    let class = card_class(props.spec.disabled, props.revealed);
    let categories = props.spec.categories.clone().unwrap_or_default();
    let CardTileProps {
        on_enter,
        on_leave,
        on_click,
        on_key,
        on_mounted,
        ..
    } = props;

    rsx! {
        div {
            class: class,
            style: "{style}",
            tabindex: "0",
            role: "button",
            "data-category": "{categories}",
            "data-index": "{index}",
            "aria-disabled": if props.spec.disabled { "true" } else { "false" },
            onmounted: move |e| on_mounted.call((index, e.data())),
            onmouseenter: move |_| on_enter.call(index),
            onmouseleave: move |_| on_leave.call(index),
            onclick: move |e| {
                e.prevent_default();
                on_click.call(index);
            },
            onkeydown: move |e| {
                let key = nav_key(&e.key());
                if key != NavKey::Other {
                    tracing::trace!(index, ?key, "Card key");
                    e.prevent_default();
                    on_key.call((index, key));
                }
            },

            div { class: "card-icon", "{props.spec.icon}" }
            h3 { class: "card-title", "{props.spec.title}" }
            p { class: "card-description", "{props.spec.description}" }
            if props.spec.disabled {
                span { class: "card-badge", "Coming soon" }
            }
        }
    }
}
