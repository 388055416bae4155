//! Zoom-dependent scaled copies of the background, mask and edge layers.
//!
//! This is a pure performance cache. Mutations call [`RenderCache::invalidate`]
//! (or [`RenderCache::mark_mask_dirty`] when only the mask changed); the
//! presentation layer asks for fresh layers once per frame.

use image::imageops::{self, FilterType};
use image::{RgbImage, RgbaImage};

/// Scaled layers for the current zoom.
#[derive(Debug, Clone, Default)]
pub struct ScaledLayers {
    pub background: Option<RgbImage>,
    pub mask: Option<RgbImage>,
    pub edges: Option<RgbaImage>,
}

#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    last_zoom: Option<f64>,
    zoom_changed: bool,
    mask_dirty: bool,
    layers: ScaledLayers,
}

impl RenderCache {
    pub fn new() -> Self {
        Self {
            mask_dirty: true,
            ..Default::default()
        }
    }

    /// Forgets everything; the next frame rebuilds every layer.
    pub fn invalidate(&mut self) {
        self.last_zoom = None;
        self.mask_dirty = true;
    }

    /// The mask changed but the background did not.
    pub fn mark_mask_dirty(&mut self) {
        self.mask_dirty = true;
    }

    /// Records `zoom` as current and reports whether any layer must be rebuilt.
    pub fn ensure_fresh(&mut self, zoom: f64) -> bool {
        if self.last_zoom != Some(zoom) {
            self.last_zoom = Some(zoom);
            self.zoom_changed = true;
            self.mask_dirty = true;
        }
        self.zoom_changed || self.mask_dirty
    }

    /// Returns the layers scaled to `zoom`, rebuilding only what is stale.
    ///
    /// `mask` is only called when the mask layer has to be rebuilt.
    pub fn layers(
        &mut self,
        zoom: f64,
        background: Option<&RgbImage>,
        mask: impl FnOnce() -> RgbImage,
        edges: Option<&RgbaImage>,
    ) -> &ScaledLayers {
        if self.ensure_fresh(zoom) {
            let mask = mask();
            let (w, h) = mask.dimensions();
            let target_w = ((w as f64 * zoom) as u32).max(1);
            let target_h = ((h as f64 * zoom) as u32).max(1);

            if self.zoom_changed {
                self.layers.background =
                    background.map(|bg| imageops::resize(bg, target_w, target_h, FilterType::Nearest));
                self.layers.edges =
                    edges.map(|e| imageops::resize(e, target_w, target_h, FilterType::Nearest));
                self.zoom_changed = false;
            }
            self.layers.mask = Some(imageops::resize(&mask, target_w, target_h, FilterType::Nearest));
            self.mask_dirty = false;
        }
        &self.layers
    }
}
