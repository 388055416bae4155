//! Background images: decoding, placement into the world and the edge overlay.

use ghosty_core::constants::{BACKGROUND_FILL_COLOR, EDGE_OVERLAY_COLOR};
use ghosty_core::{ImageError, Result};
use image::{imageops, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Where a background came from, kept so that saving can reference it again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundSource {
    /// File the image was read from, if any.
    pub path: Option<PathBuf>,
    /// Encoded bytes restored from a project's embedded copy.
    pub embedded: Option<Vec<u8>>,
}

/// A decoded background sized to the world, plus its lazily computed edge overlay.
#[derive(Debug, Clone)]
pub struct Background {
    pub image: RgbImage,
    pub source: BackgroundSource,
    edges: Option<RgbaImage>,
}

impl Background {
    pub fn new(image: RgbImage, source: BackgroundSource) -> Self {
        Self {
            image,
            source,
            edges: None,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The edge overlay, computing it on first use.
    pub fn edges(&mut self) -> &RgbaImage {
        let image = &self.image;
        self.edges.get_or_insert_with(|| compute_edges(image))
    }

    pub fn cached_edges(&self) -> Option<&RgbaImage> {
        self.edges.as_ref()
    }
}

/// Decodes an image of any supported format. `source_name` labels errors.
pub fn decode_image(bytes: &[u8], source_name: &str) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(|source| ImageError::Decode {
        source_name: source_name.to_string(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Reads and decodes an image file, returning the pixels and the raw file bytes.
pub fn load_image_file(path: &Path) -> Result<(RgbImage, Vec<u8>)> {
    let bytes = std::fs::read(path)?;
    let image = decode_image(&bytes, &path.display().to_string())?;
    Ok((image, bytes))
}

/// Places `image` on a white canvas of the given size.
///
/// Smaller images are centred; larger ones are cropped to their top-left region.
pub fn place_onto_canvas(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (iw, ih) = image.dimensions();
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(BACKGROUND_FILL_COLOR));
    let x = width.saturating_sub(iw) / 2;
    let y = height.saturating_sub(ih) / 2;
    let visible = imageops::crop_imm(image, 0, 0, iw.min(width), ih.min(height)).to_image();
    imageops::replace(&mut canvas, &visible, x as i64, y as i64);
    canvas
}

fn luma_mean(p: &Rgb<u8>) -> i32 {
    (p[0] as i32 + p[1] as i32 + p[2] as i32) / 3
}

/// Gradient-magnitude overlay of a background.
///
/// Each interior pixel gets `|mean(x+1) - mean(x-1)| + |mean(y+1) - mean(y-1)|`
/// (clamped to 255) as the alpha of the frame colour; border pixels stay
/// transparent. Runs synchronously over every pixel.
pub fn compute_edges(image: &RgbImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    let [r, g, b] = EDGE_OVERLAY_COLOR;
    let mut out = RgbaImage::from_pixel(w, h, Rgba([r, g, b, 0]));
    if w < 3 || h < 3 {
        return out;
    }
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let gx = (luma_mean(image.get_pixel(x + 1, y)) - luma_mean(image.get_pixel(x - 1, y))).abs();
            let gy = (luma_mean(image.get_pixel(x, y + 1)) - luma_mean(image.get_pixel(x, y - 1))).abs();
            let alpha = (gx + gy).clamp(0, 255) as u8;
            out.put_pixel(x, y, Rgba([r, g, b, alpha]));
        }
    }
    tracing::debug!("Computed edge overlay for {}x{} background", w, h);
    out
}
