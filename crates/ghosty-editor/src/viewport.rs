//! Viewport and coordinate transformation for the drawing area.
//!
//! Maps world coordinates onto the screen rectangle reserved for the level:
//! `screen = view_origin + pan + world * zoom`. Zoom is clamped to
//! `[ZOOM_MIN, ZOOM_MAX]` and view state is never part of the undoable model
//! beyond being carried along in snapshots.

use std::fmt;

use ghosty_core::constants::{VIEW_FIT_MARGIN, ZOOM_MAX, ZOOM_MIN, ZOOM_PRESETS};
use ghosty_settings::ViewSettings;

/// Multiplicative zoom step for one wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Screen rectangle occupied by the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, sx: f64, sy: f64) -> bool {
        sx >= self.x && sx < self.x + self.width && sy >= self.y && sy < self.y + self.height
    }
}

/// Zoom and pan of the drawing area.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    rect: ViewRect,
    fit_margin: f64,
}

impl Viewport {
    /// Creates a viewport at 1:1 zoom with the world origin at the view's corner.
    pub fn new(rect: ViewRect) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            rect,
            fit_margin: VIEW_FIT_MARGIN,
        }
    }

    pub fn from_settings(settings: &ViewSettings) -> Self {
        let mut viewport = Self::new(ViewRect::new(
            settings.x,
            settings.y,
            settings.width,
            settings.height,
        ));
        viewport.fit_margin = settings.fit_margin;
        viewport
    }

    pub fn rect(&self) -> ViewRect {
        self.rect
    }

    /// Moves or resizes the drawing area (window resize).
    pub fn set_rect(&mut self, rect: ViewRect) {
        self.rect = rect;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    /// Sets zoom and pan directly. Zoom is clamped.
    pub fn set_state(&mut self, zoom: f64, pan_x: f64, pan_y: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self.pan_x = pan_x;
        self.pan_y = pan_y;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Whether a screen position lies inside the drawing area.
    pub fn contains_screen(&self, sx: f64, sy: f64) -> bool {
        self.rect.contains(sx, sy)
    }

    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.rect.x + self.pan_x + x * self.zoom,
            self.rect.y + self.pan_y + y * self.zoom,
        )
    }

    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        (
            (sx - self.rect.x - self.pan_x) / self.zoom,
            (sy - self.rect.y - self.pan_y) / self.zoom,
        )
    }

    /// Zooms to `factor`, keeping the world point under `anchor` fixed on screen.
    ///
    /// Without an anchor the centre of the drawing area is used.
    pub fn zoom_to(&mut self, factor: f64, anchor: Option<(f64, f64)>) {
        let factor = factor.clamp(ZOOM_MIN, ZOOM_MAX);
        let (ax, ay) = anchor.unwrap_or_else(|| self.rect.center());
        let (wx, wy) = self.screen_to_world(ax, ay);
        self.zoom = factor;
        let (sx, sy) = self.world_to_screen(wx, wy);
        self.pan_x += ax - sx;
        self.pan_y += ay - sy;
    }

    /// Multiplies the zoom by `step` (one wheel notch is [`ZOOM_STEP`] or its inverse).
    pub fn zoom_by(&mut self, step: f64, anchor: Option<(f64, f64)>) {
        self.zoom_to(self.zoom * step, anchor);
    }

    /// Jumps to one of the preset zoom levels. Unknown indices are ignored.
    pub fn zoom_preset(&mut self, index: usize, anchor: Option<(f64, f64)>) {
        if let Some(&factor) = ZOOM_PRESETS.get(index) {
            self.zoom_to(factor, anchor);
        }
    }

    fn fit_factor(&self, world_w: u32, world_h: u32) -> f64 {
        let zw = (self.rect.width - self.fit_margin) / world_w.max(1) as f64;
        let zh = (self.rect.height - self.fit_margin) / world_h.max(1) as f64;
        zw.min(zh)
    }

    /// Zooms so the whole world fits, anchored at the view centre.
    pub fn fit_to_view(&mut self, world_w: u32, world_h: u32) {
        let factor = self.fit_factor(world_w, world_h);
        self.zoom_to(factor, None);
    }

    /// Zooms so the whole world fits and centres it in the view.
    pub fn fit_and_center(&mut self, world_w: u32, world_h: u32) {
        self.zoom = self.fit_factor(world_w, world_h).clamp(ZOOM_MIN, ZOOM_MAX);
        let (cx, cy) = self.rect.center();
        self.pan_x = (cx - self.rect.x - world_w as f64 * self.zoom / 2.0).trunc();
        self.pan_y = (cy - self.rect.y - world_h as f64 * self.zoom / 2.0).trunc();
    }

    /// Resets to 1:1 zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_settings(&ViewSettings::default())
    }
}
