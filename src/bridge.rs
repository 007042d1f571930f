//! Browser bridge.
//!
//! A few page signals have no Dioxus event: window scroll, resize,
//! document visibility and viewport intersection. A small script installed
//! with `document::eval` listens for them and posts JSON messages back,
//! which are decoded into [`BrowserSignal`] and turned into page events.

use cardhub_core::{Intersection, PageEvent, Viewport};
use serde::Deserialize;

/// Script installed once the grid is mounted. `{threshold}` is replaced
/// with the reveal threshold before evaluation.
const BRIDGE_TEMPLATE: &str = r#"
const send = (msg) => dioxus.send(msg);
const supported = 'IntersectionObserver' in window;
send({ kind: 'ready', width: window.innerWidth, height: window.innerHeight, intersection: supported });

window.addEventListener('scroll', () => {
    send({ kind: 'scroll', offset: window.pageYOffset });
}, { passive: true });

window.addEventListener('resize', () => {
    send({ kind: 'resize', width: window.innerWidth, height: window.innerHeight });
});

document.addEventListener('visibilitychange', () => {
    send({ kind: 'visibility', hidden: document.hidden });
});

if (supported) {
    const threshold = {threshold};
    const observer = new IntersectionObserver((entries) => {
        send({
            kind: 'intersect',
            entries: entries
                .filter((entry) => entry.isIntersecting)
                .map((entry) => ({ index: Number(entry.target.dataset.index), ratio: entry.intersectionRatio })),
        });
    }, { threshold: [threshold, 0.25, 0.5, 1.0] });
    document.querySelectorAll('.card[data-index]').forEach((card) => observer.observe(card));
}

await new Promise(() => {});
"#;

/// Build the bridge script for the given reveal threshold.
pub fn bridge_script(threshold: f64) -> String {
    BRIDGE_TEMPLATE.replace("{threshold}", &threshold.to_string())
}

/// Script that opens a card's link outside the app window.
pub fn open_link_script(url: &str) -> String {
    let quoted = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.open({quoted}, '_blank');")
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct IntersectionEntry {
    pub index: usize,
    pub ratio: f64,
}

/// A message posted by the bridge script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrowserSignal {
    Ready {
        width: f64,
        height: f64,
        intersection: bool,
    },
    Scroll {
        offset: f64,
    },
    Resize {
        width: f64,
        height: f64,
    },
    Visibility {
        hidden: bool,
    },
    Intersect {
        entries: Vec<IntersectionEntry>,
    },
}

impl BrowserSignal {
    /// Viewport size carried by the signal, if any.
    pub fn viewport(&self) -> Option<Viewport> {
        match *self {
            BrowserSignal::Ready { width, height, .. } | BrowserSignal::Resize { width, height } => {
                Some(Viewport::new(width, height))
            }
            _ => None,
        }
    }

    /// Page event for the signal. `Ready` and `Resize` only update host
    /// state and produce none.
    pub fn into_event(self) -> Option<PageEvent> {
        match self {
            BrowserSignal::Ready { .. } | BrowserSignal::Resize { .. } => None,
            BrowserSignal::Scroll { offset } => Some(PageEvent::Scroll(offset)),
            BrowserSignal::Visibility { hidden } => Some(PageEvent::VisibilityChanged { hidden }),
            BrowserSignal::Intersect { entries } if entries.is_empty() => None,
            BrowserSignal::Intersect { entries } => Some(PageEvent::Intersections(
                entries
                    .into_iter()
                    .map(|e| Intersection::new(e.index, e.ratio))
                    .collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> BrowserSignal {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn ready_carries_viewport_and_support() {
        let signal = parse(r#"{"kind":"ready","width":1280,"height":720,"intersection":false}"#);
        assert_eq!(signal.viewport(), Some(Viewport::new(1280.0, 720.0)));
        assert!(matches!(signal, BrowserSignal::Ready { intersection: false, .. }));
        assert_eq!(signal.into_event(), None);
    }

    #[test]
    fn scroll_becomes_page_event() {
        let signal = parse(r#"{"kind":"scroll","offset":120.5}"#);
        assert_eq!(signal.into_event(), Some(PageEvent::Scroll(120.5)));
    }

    #[test]
    fn visibility_becomes_page_event() {
        let signal = parse(r#"{"kind":"visibility","hidden":true}"#);
        assert_eq!(
            signal.into_event(),
            Some(PageEvent::VisibilityChanged { hidden: true })
        );
    }

    #[test]
    fn intersections_keep_indexes() {
        let signal = parse(r#"{"kind":"intersect","entries":[{"index":2,"ratio":0.3},{"index":0,"ratio":1}]}"#);
        assert_eq!(
            signal.into_event(),
            Some(PageEvent::Intersections(vec![
                Intersection::new(2, 0.3),
                Intersection::new(0, 1.0),
            ]))
        );
    }

    #[test]
    fn empty_intersection_batch_is_dropped() {
        let signal = parse(r#"{"kind":"intersect","entries":[]}"#);
        assert_eq!(signal.into_event(), None);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<BrowserSignal>(r#"{"kind":"zoom"}"#).is_err());
    }

    #[test]
    fn script_embeds_threshold() {
        let script = bridge_script(0.1);
        assert!(script.contains("const threshold = 0.1;"));
        assert!(!script.contains("{threshold}"));
    }

    #[test]
    fn link_script_quotes_url() {
        assert_eq!(
            open_link_script("https://a.example/?q='x'"),
            r#"window.open("https://a.example/?q='x'", '_blank');"#
        );
    }
}
