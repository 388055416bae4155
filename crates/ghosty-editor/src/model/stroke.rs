use crate::geometry;
use ghosty_core::constants::{WIDTH_MAX, WIDTH_MIN};
use ghosty_core::{IPoint, IRect};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a stroke's points are turned into wall pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawMode {
    /// Straight segments between consecutive points.
    #[default]
    #[serde(rename = "poly")]
    Polyline,
    /// Axis-aligned rectangles with square joints.
    #[serde(rename = "straight_poly")]
    OrthogonalPolyline,
}

/// A wall stroke in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub mode: DrawMode,
    pub points: Vec<IPoint>,
    pub visible: bool,
    pub locked: bool,
    pub name: String,
    /// Line thickness in world pixels, always within `[WIDTH_MIN, WIDTH_MAX]`.
    pub width: i32,
}

impl Stroke {
    pub fn new(mode: DrawMode, points: Vec<IPoint>, width: i32, name: impl Into<String>) -> Self {
        Self {
            mode,
            points,
            visible: true,
            locked: false,
            name: name.into(),
            width: width.clamp(WIDTH_MIN, WIDTH_MAX),
        }
    }

    pub fn bounds(&self) -> IRect {
        geometry::stroke_bounds(&self.points, self.width)
    }

    /// The points as they are rasterised: orthogonal strokes are normalised first.
    pub fn render_points(&self) -> Cow<'_, [IPoint]> {
        match self.mode {
            DrawMode::Polyline => Cow::Borrowed(&self.points),
            DrawMode::OrthogonalPolyline => Cow::Owned(geometry::orthogonalize(&self.points)),
        }
    }
}
