//! Wall mask rasterisation with tiny-skia.
//!
//! All drawing is aliased so that masks contain only the exact semantic
//! colours. Integer world points address pixel centres, which is why path
//! geometry is shifted by half a pixel before filling.

use crate::model::{DrawMode, Stroke};
use ghosty_core::constants::{Rgb8, MASK_ERASE_COLOR};
use ghosty_core::{Error, IPoint, ImageError, Result};
use image::{Rgb, RgbImage};
use tiny_skia::{
    Color, FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Rect, Stroke as SkStroke,
    Transform,
};

fn solid_paint(color: Rgb8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(color[0], color[1], color[2], 255));
    paint.anti_alias = false;
    paint
}

fn pixel_centres() -> Transform {
    Transform::from_translate(0.5, 0.5)
}

/// Allocates an opaque pixmap filled with the mask erase colour.
pub fn blank_mask(width: u32, height: u32) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(width, height).ok_or(Error::Image(ImageError::InvalidSize {
        width,
        height,
    }))?;
    clear(&mut pixmap, MASK_ERASE_COLOR);
    Ok(pixmap)
}

/// Fills the whole pixmap with one opaque colour.
pub fn clear(pixmap: &mut Pixmap, color: Rgb8) {
    pixmap.fill(Color::from_rgba8(color[0], color[1], color[2], 255));
}

/// Fills the integer rectangle `x, y, w, h` (clipped to the pixmap).
pub fn fill_int_rect(pixmap: &mut Pixmap, x: i32, y: i32, w: i32, h: i32, color: Rgb8) {
    if w <= 0 || h <= 0 {
        return;
    }
    if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
        pixmap.fill_rect(rect, &solid_paint(color), Transform::identity(), None);
    }
}

/// Sets a single pixel when it lies inside the pixmap.
pub fn stamp_pixel(pixmap: &mut Pixmap, p: IPoint, color: Rgb8) {
    if p.x < 0 || p.y < 0 || p.x >= pixmap.width() as i32 || p.y >= pixmap.height() as i32 {
        return;
    }
    fill_int_rect(pixmap, p.x, p.y, 1, 1, color);
}

fn square_dab(pixmap: &mut Pixmap, p: IPoint, width: i32, color: Rgb8) {
    let half = width / 2;
    fill_int_rect(pixmap, p.x - half, p.y - half, width, width, color);
}

/// Axis rectangle covering the segment `a -> b`, inclusive of both endpoints.
fn axis_segment(pixmap: &mut Pixmap, a: IPoint, b: IPoint, width: i32, color: Rgb8) {
    let half = width / 2;
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    if dx.abs() >= dy.abs() {
        let x0 = a.x.min(b.x);
        fill_int_rect(pixmap, x0, a.y - half, dx.abs() + 1, width, color);
    } else {
        let y0 = a.y.min(b.y);
        fill_int_rect(pixmap, a.x - half, y0, width, dy.abs() + 1, color);
    }
}

fn segments_path(points: &[IPoint]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for pair in points.windows(2) {
        pb.move_to(pair[0].x as f32, pair[0].y as f32);
        pb.line_to(pair[1].x as f32, pair[1].y as f32);
    }
    pb.finish()
}

/// Draws one stroke in `color` using its own width and draw mode.
pub fn draw_stroke(pixmap: &mut Pixmap, stroke: &Stroke, color: Rgb8) {
    let width = stroke.width.max(1);
    let points = stroke.render_points();
    match points.len() {
        0 => return,
        1 => {
            square_dab(pixmap, points[0], width, color);
            return;
        }
        _ => {}
    }

    match stroke.mode {
        DrawMode::Polyline => {
            let Some(path) = segments_path(&points) else {
                return;
            };
            let sk_stroke = SkStroke {
                width: width as f32,
                line_cap: LineCap::Butt,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &solid_paint(color), &sk_stroke, pixel_centres(), None);
        }
        DrawMode::OrthogonalPolyline => {
            for pair in points.windows(2) {
                axis_segment(pixmap, pair[0], pair[1], width, color);
            }
            for &joint in points.iter() {
                square_dab(pixmap, joint, width, color);
            }
        }
    }
}

/// Fills a closed polygon, including its outline pixels.
pub fn fill_polygon(pixmap: &mut Pixmap, points: &[IPoint], color: Rgb8) {
    if points.len() < 3 {
        return;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x as f32, points[0].y as f32);
    for p in &points[1..] {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    let Some(path) = pb.finish() else {
        return;
    };

    let paint = solid_paint(color);
    pixmap.fill_path(&path, &paint, FillRule::EvenOdd, pixel_centres(), None);
    // Hairline outline so edge pixels are always covered.
    let outline = SkStroke {
        width: 0.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &outline, pixel_centres(), None);
}

/// Rebuilds a mask from scratch: erase colour, then every visible stroke in order.
pub fn render_mask<'a>(
    pixmap: &mut Pixmap,
    strokes: impl IntoIterator<Item = &'a Stroke>,
    draw: Rgb8,
    erase: Rgb8,
) {
    clear(pixmap, erase);
    for stroke in strokes.into_iter().filter(|s| s.visible) {
        draw_stroke(pixmap, stroke, draw);
    }
}

/// Reads one pixel as RGB. Out-of-range coordinates return `None`.
pub fn pixel_at(pixmap: &Pixmap, x: u32, y: u32) -> Option<Rgb8> {
    pixmap.pixel(x, y).map(|c| {
        let c = c.demultiply();
        [c.red(), c.green(), c.blue()]
    })
}

/// Converts an opaque pixmap into an RGB image.
pub fn to_rgb_image(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let data = pixmap.data();
    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
