//! Hub page.
//!
//! Renders the header, tab bar, card grid and toast layer from the shared
//! [`Page`](cardhub_core::Page), and feeds every UI event back into it.
//! Deferred steps (toast lifecycle, shake clearing) run on a timer task
//! that sleeps until the page's next deadline, or until an event schedules
//! a new one.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use cardhub_core::{CardSpec, CardState, Effects, NavKey, PageEvent, Point, Rect, Viewport};
use cardhub_ui::{CardTile, CategoryTabs, ToastOverlay};
use dioxus::prelude::*;
use tokio::sync::Notify;

use crate::bridge::{bridge_script, open_link_script, BrowserSignal};
use crate::components::{surface_style, HubHeader};
use crate::context::{use_page, use_page_clock, use_settings};

type MountedCards = Signal<Vec<Option<Rc<MountedData>>>>;

/// How long the timer task may sleep. `None` means park until woken.
fn timer_wait(deadline: Option<Duration>, now: Duration) -> Option<Duration> {
    deadline.map(|deadline| deadline.saturating_sub(now))
}

/// Carry out renderer-side effects requested by the page.
fn apply_effects(effects: Effects, mounted: MountedCards) {
    if let Some(target) = effects.focus {
        if let Some(Some(node)) = mounted.peek().get(target).cloned() {
            spawn(async move {
                if let Err(e) = node.set_focus(true).await {
                    tracing::debug!(index = target, error = ?e, "Failed to focus card");
                }
            });
        }
    }
    if let Some(url) = effects.follow {
        tracing::info!(%url, "Opening card link");
        let _ = document::eval(&open_link_script(&url));
    }
}

#[component]
pub fn Hub() -> Element {
    let mut page = use_page();
    let clock = use_page_clock();
    let settings = use_settings();

    let card_count = page.peek().cards().len();
    let mut mounted: MountedCards = use_signal(|| vec![None; card_count]);
    let mut hover_epoch = use_signal(|| 0u64);
    let mut viewport = use_signal(Viewport::default);
    let mut reveal_ready = use_signal(|| false);
    let wake = use_signal(|| Arc::new(Notify::new()));

    // Timer task: run deferred steps as they come due. Handlers that may
    // schedule a step call `notify_one`, so an idle page never polls.
    use_future(move || async move {
        let notify = wake.peek().clone();
        loop {
            match timer_wait(page.peek().next_deadline(), clock.now()) {
                Some(wait) => {
                    tokio::select! {
                        _ = tokio::time::sleep(wait) => {}
                        _ = notify.notified() => {}
                    }
                }
                None => notify.notified().await,
            }

            let now = clock.now();
            if page.peek().next_deadline().is_some_and(|d| d <= now) {
                page.write().advance(now);
            }
        }
    });

    // Browser bridge: scroll, resize, visibility and intersections.
    let threshold = settings.config.reveal.threshold;
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&bridge_script(threshold));
            loop {
                match eval.recv::<BrowserSignal>().await {
                    Ok(signal) => {
                        if let BrowserSignal::Ready { intersection, .. } = signal {
                            tracing::debug!(intersection, "Browser bridge ready");
                            page.write().set_intersection_supported(intersection);
                            reveal_ready.set(intersection);
                        }
                        if let Some(size) = signal.viewport() {
                            viewport.set(size);
                        }
                        if let Some(event) = signal.into_event() {
                            page.write().handle(event, clock.now());
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = ?e, "Browser bridge closed");
                        break;
                    }
                }
            }
        });
    });

    // Last hover wins: a newer enter or any leave invalidates an enter
    // still measuring layout.
    let on_enter = move |index: usize| {
        *hover_epoch.write() += 1;
        let epoch = *hover_epoch.peek();
        spawn(async move {
            let nodes: Vec<_> = mounted.peek().iter().cloned().enumerate().collect();
            let mut boxes = Vec::with_capacity(nodes.len());
            for (i, node) in nodes {
                let Some(node) = node else { continue };
                match node.get_client_rect().await {
                    Ok(rect) => boxes.push((
                        i,
                        Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height),
                    )),
                    Err(e) => tracing::debug!(index = i, error = ?e, "Failed to measure card"),
                }
            }
            if *hover_epoch.peek() != epoch {
                tracing::trace!(index, "Hover superseded before layout was measured");
                return;
            }
            let mut page = page.write();
            for (i, bounds) in boxes {
                page.set_card_bounds(i, bounds);
            }
            page.handle(PageEvent::PointerEnter(index), clock.now());
        });
    };

    let on_leave = move |index: usize| {
        *hover_epoch.write() += 1;
        page.write().handle(PageEvent::PointerLeave(index), clock.now());
    };

    let on_click = move |index: usize| {
        let effects = page.write().handle(PageEvent::CardClicked(index), clock.now());
        wake.peek().notify_one();
        apply_effects(effects, mounted);
    };

    let on_key = move |(index, key): (usize, NavKey)| {
        let effects = page.write().handle(PageEvent::KeyDown { index, key }, clock.now());
        wake.peek().notify_one();
        apply_effects(effects, mounted);
    };

    let on_mounted = move |(index, node): (usize, Rc<MountedData>)| {
        if let Some(slot) = mounted.write().get_mut(index) {
            *slot = Some(node);
        }
    };

    let on_select = move |index: usize| {
        page.write().handle(PageEvent::TabClicked(index), clock.now());
    };

    let on_pointer_move = move |e: MouseEvent| {
        let size = *viewport.peek();
        if size.width <= 0.0 || size.height <= 0.0 {
            return;
        }
        let at = e.client_coordinates();
        page.write().handle(
            PageEvent::PointerMove {
                pointer: Point::new(at.x, at.y),
                viewport: size,
            },
            clock.now(),
        );
    };

    let state = page.read();
    let header = state.header().copied();
    let surface = surface_style(state.surface());
    let tabs = state.catalog().tabs.clone();
    let active = state.tabs().active();
    let tiles: Vec<(usize, CardSpec, CardState, bool)> = state
        .catalog()
        .cards
        .iter()
        .cloned()
        .zip(state.cards().iter().cloned())
        .enumerate()
        .map(|(index, (spec, card))| (index, spec, card, state.reveal().is_revealed(index)))
        .collect();
    let toasts = state.toasts().toasts().to_vec();
    drop(state);

    let surface_class = if reveal_ready() {
        "hub-surface reveal-ready"
    } else {
        "hub-surface"
    };

    rsx! {
        div {
            class: surface_class,
            style: "{surface}",
            onmousemove: on_pointer_move,

            if let Some(header) = header {
                HubHeader {
                    title: settings.catalog_title.clone(),
                    subtitle: settings.catalog_subtitle.clone(),
                    state: header,
                }
            }

            CategoryTabs {
                tabs: tabs,
                active: active,
                on_select: on_select,
            }

            main { class: "card-grid",
                for (index, spec, card, revealed) in tiles {
                    CardTile {
                        key: "{index}",
                        index: index,
                        spec: spec,
                        state: card,
                        revealed: revealed,
                        on_enter: on_enter,
                        on_leave: on_leave,
                        on_click: on_click,
                        on_key: on_key,
                        on_mounted: on_mounted,
                    }
                }
            }
        }

        // Outside the surface so fixed positioning stays relative to the window.
        ToastOverlay { toasts: toasts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_page_parks_the_timer() {
        assert_eq!(timer_wait(None, Duration::from_secs(5)), None);
    }

    #[test]
    fn timer_sleeps_until_the_deadline() {
        let wait = timer_wait(Some(Duration::from_millis(3010)), Duration::from_millis(10));
        assert_eq!(wait, Some(Duration::from_secs(3)));
    }

    #[test]
    fn overdue_deadline_wakes_at_once() {
        let wait = timer_wait(Some(Duration::from_millis(10)), Duration::from_millis(500));
        assert_eq!(wait, Some(Duration::ZERO));
    }
}
