//! Toast Notification Component
//!
//! Fixed overlay pinned to the top centre of the window. It is rendered
//! above the viewport until the presenter marks it shown, and the CSS
//! transition does the sliding.

use cardhub_core::Toast;
use dioxus::prelude::*;

/// Transform for a toast slid in or out.
pub fn toast_transform(shown: bool) -> &'static str {
    if shown {
        "translateX(-50%) translateY(0)"
    } else {
        "translateX(-50%) translateY(-100px)"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastOverlayProps {
    /// Toasts currently in the layer (at most one in practice)
    pub toasts: Vec<Toast>,
}

#[component]
pub fn ToastOverlay(props: ToastOverlayProps) -> Element {
    rsx! {
        for toast in props.toasts.iter() {
            {
                let style = format!("transform: {};", toast_transform(toast.shown));
                rsx! {
                    div {
                        key: "{toast.id}",
                        class: "notification",
                        role: "status",
                        "aria-live": "polite",
                        style: "{style}",
                        "{toast.message}"
                    }
                }
            }
        }
    }
}
