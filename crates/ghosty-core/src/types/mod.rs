//! Integer world-space primitives.
//!
//! Persisted geometry lives on the integer world grid. `IPoint` serialises as a
//! two-element JSON array (`[x, y]`) so project files stay compact and readable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the integer world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl IPoint {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a fractional world position to the nearest grid point.
    pub fn round(x: f64, y: f64) -> Self {
        Self::new(x.round() as i32, y.round() as i32)
    }

    /// Truncates a fractional world position toward zero.
    pub fn truncate(x: f64, y: f64) -> Self {
        Self::new(x as i32, y as i32)
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_sq(self, other: IPoint) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Whether the two points share an x or a y coordinate.
    pub fn is_axis_aligned_with(self, other: IPoint) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl From<(i32, i32)> for IPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<IPoint> for (i32, i32) {
    fn from(p: IPoint) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for IPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned integer rectangle, half-open on its right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The smallest rectangle containing every point, padded by `pad` on all sides.
    ///
    /// Returns an empty rectangle at the origin when `points` is empty.
    pub fn around(points: &[IPoint], pad: i32) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self::new(
            min_x - pad,
            min_y - pad,
            max_x - min_x + 2 * pad,
            max_y - min_y + 2 * pad,
        )
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Grows the rectangle by `dw` x `dh` in total, keeping its centre.
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self::new(self.x - dw / 2, self.y - dh / 2, self.w + dw, self.h + dh)
    }

    /// Whether a world position lies inside the rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !self.is_empty()
            && x >= self.x as f64
            && x < self.right() as f64
            && y >= self.y as f64
            && y < self.bottom() as f64
    }
}
