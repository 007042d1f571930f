//! View seams between the interaction components and a renderer.
//!
//! Components never touch a concrete rendering technology. They read layout
//! and attributes through these traits and write visual style back through
//! them. The `*State` structs are the in-memory implementations the desktop
//! shell renders from.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::CardSpec;
use crate::geometry::{Rect, Translation};

/// A named keyframe animation played on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub name: &'static str,
    pub duration: Duration,
}

impl Animation {
    /// Horizontal shake played when a disabled card is clicked.
    pub const fn shake(duration: Duration) -> Self {
        Self {
            name: "shake",
            duration,
        }
    }

    /// The same shake under a second keyframe name. A renderer only replays
    /// an animation whose value changed, so a restarted shake alternates
    /// between the two names.
    pub const fn shake_replay(duration: Duration) -> Self {
        Self {
            name: "shake-replay",
            duration,
        }
    }

    /// CSS `animation` shorthand.
    pub fn to_css(&self) -> String {
        format!("{} {}s", self.name, self.duration.as_secs_f64())
    }
}

/// Read/write access to a single card tile.
pub trait CardView {
    /// Raw space-separated category attribute, if present.
    fn categories(&self) -> Option<&str>;

    /// Whether the card carries the disabled marker.
    fn is_disabled(&self) -> bool;

    /// Current layout bounding box.
    fn bounds(&self) -> Rect;

    fn set_visible(&mut self, visible: bool);

    /// `None` restores the default (un-offset) transform.
    fn set_transform(&mut self, transform: Option<Translation>);

    /// `None` restores the stylesheet opacity.
    fn set_opacity(&mut self, opacity: Option<f64>);

    fn set_animation(&mut self, animation: Option<Animation>);

    /// Whether any whitespace-separated tag equals `category`.
    fn has_category(&self, category: &str) -> bool {
        self.categories()
            .map(|raw| raw.split_whitespace().any(|tag| tag == category))
            .unwrap_or(false)
    }
}

/// In-memory card view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardState {
    pub categories: Option<String>,
    pub disabled: bool,
    pub bounds: Rect,
    pub visible: bool,
    pub transform: Option<Translation>,
    pub opacity: Option<f64>,
    #[serde(skip)]
    pub animation: Option<Animation>,
}

impl CardState {
    pub fn new(categories: Option<&str>, disabled: bool) -> Self {
        Self {
            categories: categories.map(str::to_string),
            disabled,
            visible: true,
            ..Default::default()
        }
    }

    /// Card state with a known layout box.
    pub fn at(categories: Option<&str>, disabled: bool, bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::new(categories, disabled)
        }
    }

    /// Update the cached layout box (the shell refreshes this on hover).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

impl From<&CardSpec> for CardState {
    fn from(spec: &CardSpec) -> Self {
        Self::new(spec.categories.as_deref(), spec.disabled)
    }
}

impl CardView for CardState {
    fn categories(&self) -> Option<&str> {
        self.categories.as_deref()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_transform(&mut self, transform: Option<Translation>) {
        self.transform = transform;
    }

    fn set_opacity(&mut self, opacity: Option<f64>) {
        self.opacity = opacity;
    }

    fn set_animation(&mut self, animation: Option<Animation>) {
        self.animation = animation;
    }
}

/// Write access to the page header.
pub trait HeaderView {
    fn set_transform(&mut self, transform: Translation);
    fn set_opacity(&mut self, opacity: f64);
}

/// In-memory header view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderState {
    pub transform: Translation,
    pub opacity: f64,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            transform: Translation::ZERO,
            opacity: 1.0,
        }
    }
}

impl HeaderView for HeaderState {
    fn set_transform(&mut self, transform: Translation) {
        self.transform = transform;
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}

/// Write access to the page background surface.
pub trait SurfaceView {
    fn set_background_offset(&mut self, offset: Translation);
    fn set_animation_paused(&mut self, paused: bool);
}

/// In-memory page surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceState {
    pub background_offset: Translation,
    pub animation_paused: bool,
}

impl SurfaceState {
    /// CSS `animation-play-state` value.
    pub fn play_state(&self) -> &'static str {
        if self.animation_paused {
            "paused"
        } else {
            "running"
        }
    }
}

impl SurfaceView for SurfaceState {
    fn set_background_offset(&mut self, offset: Translation) {
        self.background_offset = offset;
    }

    fn set_animation_paused(&mut self, paused: bool) {
        self.animation_paused = paused;
    }
}
