//! Mask bake: rasterises walls, markers and doors into the exported image.
//!
//! Starts from the wall mask, stamps the marker pixels, then fills the
//! visible doors. Door fills come last, so a door covers any marker pixel
//! that falls inside it.

use crate::canvas::LevelCanvas;
use crate::model::Direction;
use crate::raster;
use ghosty_core::constants::{
    DOOR_BACK_BAKE_COLOR, DOOR_NEXT_BAKE_COLOR, ENTRY_BACK_BAKE_COLOR, ENTRY_NEXT_BAKE_COLOR,
    SPAWN_BAKE_COLOR,
};
use ghosty_core::{ImageError, Result};
use image::RgbImage;
use std::path::Path;

/// Bakes the export mask of `canvas`.
pub fn bake_mask(canvas: &LevelCanvas) -> RgbImage {
    let mut pixmap = canvas.mask().clone();

    if let Some(spawn) = canvas.spawn() {
        raster::stamp_pixel(&mut pixmap, spawn, SPAWN_BAKE_COLOR);
    }
    for &p in canvas.entries(Direction::Next) {
        raster::stamp_pixel(&mut pixmap, p, ENTRY_NEXT_BAKE_COLOR);
    }
    for &p in canvas.entries(Direction::Back) {
        raster::stamp_pixel(&mut pixmap, p, ENTRY_BACK_BAKE_COLOR);
    }

    for door in canvas.doors().iter().filter(|d| d.is_bakeable()) {
        let color = match door.kind {
            Direction::Next => DOOR_NEXT_BAKE_COLOR,
            Direction::Back => DOOR_BACK_BAKE_COLOR,
        };
        raster::fill_polygon(&mut pixmap, &door.points, color);
    }

    raster::to_rgb_image(&pixmap)
}

/// Bakes `canvas` and writes it as a PNG.
pub fn export_mask_png(canvas: &LevelCanvas, path: &Path) -> Result<()> {
    let mask = bake_mask(canvas);
    mask.save_with_format(path, image::ImageFormat::Png)
        .map_err(ImageError::Encode)?;
    tracing::info!("Exported mask {} ({}x{})", path.display(), mask.width(), mask.height());
    Ok(())
}
