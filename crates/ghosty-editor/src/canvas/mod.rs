//! The level canvas: per-document world state.
//!
//! Owns the world size, background, derived wall mask, strokes, doors,
//! markers, selection and the editing parameters. The wall mask is never
//! edited directly; it is regenerated from the visible strokes by
//! [`LevelCanvas::update_mask`] after every structural change.

mod operations;

use crate::background::{Background, BackgroundSource};
use crate::model::{Direction, Door, ItemKind, Selection, Stroke};
use crate::raster;
use crate::render_cache::{RenderCache, ScaledLayers};
use ghosty_core::constants::{
    GRID_SIZE_DEFAULT, LINE_WIDTH_DEFAULT, MASK_DRAW_COLOR, MASK_ERASE_COLOR,
    PREVIEW_ALPHA_DEFAULT,
};
use ghosty_core::{IPoint, ProjectError, Result};
use ghosty_settings::DocumentSettings;
use image::RgbImage;
use tiny_skia::Pixmap;

/// Per-document world state.
#[derive(Debug, Clone)]
pub struct LevelCanvas {
    width: u32,
    height: u32,
    background: Option<Background>,
    mask: Pixmap,
    pub(crate) strokes: Vec<Stroke>,
    pub(crate) doors: Vec<Door>,
    pub(crate) spawn: Option<IPoint>,
    pub(crate) entry_next: Vec<IPoint>,
    pub(crate) entry_back: Vec<IPoint>,
    pub(crate) selection: Option<Selection>,
    pub(crate) brush_width: i32,
    pub(crate) preview_alpha: i32,
    pub(crate) grid_on: bool,
    pub(crate) grid_size: i32,
    pub(crate) simplify_on: bool,
    pub(crate) sym_x: bool,
    pub(crate) sym_y: bool,
    show_edges: bool,
    modified: bool,
    render_cache: RenderCache,
}

fn check_world_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(ProjectError::InvalidWorldSize {
            width: width as i64,
            height: height as i64,
        }
        .into());
    }
    Ok(())
}

impl LevelCanvas {
    /// Creates an empty canvas of the given world size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_world_size(width, height)?;
        Ok(Self {
            width,
            height,
            background: None,
            mask: raster::blank_mask(width, height)?,
            strokes: Vec::new(),
            doors: Vec::new(),
            spawn: None,
            entry_next: Vec::new(),
            entry_back: Vec::new(),
            selection: None,
            brush_width: LINE_WIDTH_DEFAULT,
            preview_alpha: PREVIEW_ALPHA_DEFAULT,
            grid_on: false,
            grid_size: GRID_SIZE_DEFAULT,
            simplify_on: false,
            sym_x: false,
            sym_y: false,
            show_edges: false,
            modified: false,
            render_cache: RenderCache::new(),
        })
    }

    /// Creates an empty canvas using configured document defaults.
    pub fn with_settings(settings: &DocumentSettings) -> Result<Self> {
        let mut canvas = Self::new(settings.world_width, settings.world_height)?;
        canvas.brush_width = settings.brush_width;
        canvas.preview_alpha = settings.preview_alpha;
        canvas.grid_size = settings.grid_size;
        Ok(canvas)
    }

    /// Creates a canvas whose world adopts the size of `image`.
    pub fn from_background(image: RgbImage, source: BackgroundSource) -> Result<Self> {
        let (w, h) = image.dimensions();
        let mut canvas = Self::new(w, h)?;
        canvas.background = Some(Background::new(image, source));
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn world_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn spawn(&self) -> Option<IPoint> {
        self.spawn
    }

    pub fn entries(&self, direction: Direction) -> &[IPoint] {
        match direction {
            Direction::Next => &self.entry_next,
            Direction::Back => &self.entry_back,
        }
    }

    pub(crate) fn entries_mut(&mut self, direction: Direction) -> &mut Vec<IPoint> {
        match direction {
            Direction::Next => &mut self.entry_next,
            Direction::Back => &mut self.entry_back,
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn brush_width(&self) -> i32 {
        self.brush_width
    }

    pub fn preview_alpha(&self) -> i32 {
        self.preview_alpha
    }

    pub fn grid_on(&self) -> bool {
        self.grid_on
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn simplify_on(&self) -> bool {
        self.simplify_on
    }

    pub fn symmetry(&self) -> (bool, bool) {
        (self.sym_x, self.sym_y)
    }

    pub fn show_edges(&self) -> bool {
        self.show_edges
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// The derived wall mask.
    pub fn mask(&self) -> &Pixmap {
        &self.mask
    }

    /// The wall mask as an RGB image.
    pub fn mask_image(&self) -> RgbImage {
        raster::to_rgb_image(&self.mask)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn mark_clean(&mut self) {
        self.modified = false;
    }

    /// Whether `selection` addresses an existing item.
    pub fn contains(&self, selection: Selection) -> bool {
        match selection.kind {
            ItemKind::Stroke => selection.index < self.strokes.len(),
            ItemKind::Door => selection.index < self.doors.len(),
        }
    }

    /// Regenerates the wall mask from the visible strokes.
    pub fn update_mask(&mut self) {
        raster::render_mask(&mut self.mask, &self.strokes, MASK_DRAW_COLOR, MASK_ERASE_COLOR);
        self.render_cache.mark_mask_dirty();
    }

    /// Replaces the world size, reallocating a blank mask.
    ///
    /// Items are kept; the caller regenerates the mask once they are in place.
    pub fn set_world_size(&mut self, width: u32, height: u32) -> Result<()> {
        check_world_size(width, height)?;
        self.mask = raster::blank_mask(width, height)?;
        self.width = width;
        self.height = height;
        self.render_cache.invalidate();
        tracing::debug!("World size set to {}x{}", width, height);
        Ok(())
    }

    /// Sets the background. With `keep_world` the image is placed onto the
    /// current world; otherwise the world adopts the image size.
    pub fn set_background(
        &mut self,
        image: RgbImage,
        source: BackgroundSource,
        keep_world: bool,
    ) -> Result<()> {
        let image = if keep_world {
            crate::background::place_onto_canvas(&image, self.width, self.height)
        } else {
            let (w, h) = image.dimensions();
            self.set_world_size(w, h)?;
            self.update_mask();
            image
        };
        self.background = Some(Background::new(image, source));
        self.render_cache.invalidate();
        Ok(())
    }

    pub fn clear_background(&mut self) {
        self.background = None;
        self.render_cache.invalidate();
    }

    /// Toggles the edge overlay, computing it the first time it is shown.
    pub fn toggle_edges(&mut self) {
        self.show_edges = !self.show_edges;
        if self.show_edges {
            if let Some(bg) = self.background.as_mut() {
                bg.edges();
            }
        }
        self.render_cache.invalidate();
    }

    /// Forces every scaled layer to be rebuilt on the next frame.
    pub fn invalidate_render_cache(&mut self) {
        self.render_cache.invalidate();
    }

    /// Scaled background, mask and (when shown) edge layers for `zoom`.
    pub fn scaled_layers(&mut self, zoom: f64) -> &ScaledLayers {
        let mask = &self.mask;
        let background = self.background.as_ref().map(|bg| &bg.image);
        let edges = if self.show_edges {
            self.background.as_ref().and_then(|bg| bg.cached_edges())
        } else {
            None
        };
        self.render_cache
            .layers(zoom, background, || raster::to_rgb_image(mask), edges)
    }
}
