//! Page-level ambient effects: header fade on scroll, background parallax
//! on pointer move, and pausing ambient animation while the page is hidden.

use crate::config::AmbientConfig;
use crate::geometry::{Point, Translation};
use crate::view::{HeaderView, SurfaceView};

/// Viewport size in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct AmbientEffects {
    config: AmbientConfig,
}

impl AmbientEffects {
    pub fn new(config: &AmbientConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Header transform and opacity for a vertical scroll offset.
    pub fn header_style(&self, offset: f64) -> (Translation, f64) {
        let c = &self.config;
        if offset > c.scroll_threshold {
            let lift = (offset / c.translate_divisor).min(c.max_translate);
            let opacity = (1.0 - offset / c.fade_divisor).max(c.opacity_floor);
            (Translation::vertical(-lift), opacity)
        } else {
            (Translation::ZERO, 1.0)
        }
    }

    /// Restyle the header for `offset`. A page without a header is left alone.
    pub fn on_scroll<H: HeaderView>(&self, header: Option<&mut H>, offset: f64) {
        let Some(header) = header else {
            return;
        };
        let (transform, opacity) = self.header_style(offset);
        header.set_transform(transform);
        header.set_opacity(opacity);
    }

    /// Background shift for a pointer position.
    pub fn parallax(&self, pointer: Point, viewport: Viewport) -> Translation {
        let d = self.config.parallax_divisor;
        Translation::new(
            (pointer.x - viewport.width / 2.0) / d,
            (pointer.y - viewport.height / 2.0) / d,
        )
    }

    pub fn on_pointer_move<S: SurfaceView>(&self, surface: &mut S, pointer: Point, viewport: Viewport) {
        surface.set_background_offset(self.parallax(pointer, viewport));
    }

    pub fn on_visibility_change<S: SurfaceView>(&self, surface: &mut S, hidden: bool) {
        tracing::debug!(hidden, "Page visibility changed");
        surface.set_animation_paused(hidden);
    }
}

impl Default for AmbientEffects {
    fn default() -> Self {
        Self::new(&AmbientConfig::default())
    }
}
