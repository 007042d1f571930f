//! Planar geometry shared by the interaction components.
//!
//! All values are in layout units (CSS pixels in the desktop shell).

use serde::{Deserialize, Serialize};

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box as reported by layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner of the box.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// A 2D translation applied on top of layout.
///
/// `Translation::ZERO` is distinct from "no transform": views store an
/// `Option<Translation>` and `None` is the default, un-styled state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub const ZERO: Translation = Translation { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vertical-only translation.
    pub const fn vertical(y: f64) -> Self {
        Self { x: 0.0, y }
    }

    /// Euclidean length of the offset.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// CSS `transform` value for this offset.
    pub fn to_css(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}
