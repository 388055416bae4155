//! Pure geometry over integer point sequences.
//!
//! Everything here works in world coordinates and has no access to editor
//! state: orthogonalisation of freehand input, item bounds, hit-testing,
//! symmetry mirroring and the input constraints applied while placing points.

use crate::model::{Door, Stroke};
use ghosty_core::constants::{DOOR_BOUNDS_PAD, HIT_INFLATE};
use ghosty_core::{IPoint, IRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Converts a polyline into an axis-aligned polyline through the same vertices.
///
/// Every vertex that shares neither coordinate with the previous output vertex
/// gets a corner inserted before it. Corners alternate between
/// horizontal-first and vertical-first runs; the first ambiguous segment goes
/// along its dominant axis, horizontal on a tie. Consecutive duplicates are
/// removed from the result.
pub fn orthogonalize(points: &[IPoint]) -> Vec<IPoint> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(first);
    let mut last_axis: Option<Axis> = None;

    for &p in &points[1..] {
        let prev = out[out.len() - 1];
        if prev.is_axis_aligned_with(p) {
            out.push(p);
            last_axis = Some(if prev.y == p.y {
                Axis::Horizontal
            } else {
                Axis::Vertical
            });
            continue;
        }

        let horizontal_first = match last_axis {
            Some(Axis::Horizontal) => true,
            Some(Axis::Vertical) => false,
            None => (p.x - prev.x).abs() >= (p.y - prev.y).abs(),
        };

        if horizontal_first {
            out.push(IPoint::new(p.x, prev.y));
            last_axis = Some(Axis::Vertical);
        } else {
            out.push(IPoint::new(prev.x, p.y));
            last_axis = Some(Axis::Horizontal);
        }
        out.push(p);
    }

    out.dedup();
    out
}

/// Bounds of a stroke's vertices padded by its width on every side.
pub fn stroke_bounds(points: &[IPoint], width: i32) -> IRect {
    IRect::around(points, width)
}

/// Bounds of a door's vertices padded by a fixed margin.
pub fn door_bounds(points: &[IPoint]) -> IRect {
    IRect::around(points, DOOR_BOUNDS_PAD)
}

fn hit_test<T>(
    items: &[T],
    visible: impl Fn(&T) -> bool,
    bounds: impl Fn(&T) -> IRect,
    x: f64,
    y: f64,
) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, item)| visible(item))
        .find(|(_, item)| bounds(item).inflate(HIT_INFLATE, HIT_INFLATE).contains(x, y))
        .map(|(i, _)| i)
}

/// Index of the top-most visible stroke whose padded bounds contain `(x, y)`.
pub fn hit_test_strokes(strokes: &[Stroke], x: f64, y: f64) -> Option<usize> {
    hit_test(strokes, |s| s.visible, Stroke::bounds, x, y)
}

/// Index of the top-most visible door whose padded bounds contain `(x, y)`.
pub fn hit_test_doors(doors: &[Door], x: f64, y: f64) -> Option<usize> {
    hit_test(doors, |d| d.visible, Door::bounds, x, y)
}

/// Mirror images of `points` across the world's centre lines.
///
/// X-symmetry reflects across the vertical centre line, Y-symmetry across the
/// horizontal one; with both enabled the two reflected copies are appended in
/// that order. The centre line is at the integer half of the world size.
pub fn mirror_points(
    points: &[IPoint],
    world_width: u32,
    world_height: u32,
    mirror_x: bool,
    mirror_y: bool,
) -> Vec<IPoint> {
    let mut out = Vec::new();
    if mirror_x {
        let cx = (world_width / 2) as i32;
        out.extend(points.iter().map(|p| IPoint::new(2 * cx - p.x, p.y)));
    }
    if mirror_y {
        let cy = (world_height / 2) as i32;
        out.extend(points.iter().map(|p| IPoint::new(p.x, 2 * cy - p.y)));
    }
    out
}

/// Locks a world position to the axis of `anchor` along which it moved the most.
pub fn constrain_to_axis(anchor: IPoint, x: f64, y: f64) -> (f64, f64) {
    let dx = (x - anchor.x as f64).abs();
    let dy = (y - anchor.y as f64).abs();
    if dx > dy {
        (x, anchor.y as f64)
    } else {
        (anchor.x as f64, y)
    }
}

/// Rounds each coordinate to the nearest multiple of `size`.
pub fn snap_to_grid(x: f64, y: f64, size: i32) -> (f64, f64) {
    if size <= 0 {
        return (x, y);
    }
    let g = size as f64;
    ((x / g).round() * g, (y / g).round() * g)
}
