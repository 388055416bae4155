use super::Direction;
use crate::geometry;
use ghosty_core::{IPoint, IRect};

/// A closed door polygon. Baked as a filled region coloured by its direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub points: Vec<IPoint>,
    pub visible: bool,
    pub locked: bool,
    pub name: String,
    pub kind: Direction,
    /// Outline width used by the on-screen overlay.
    pub width: i32,
}

impl Door {
    /// Minimum vertex count for a committed door.
    pub const MIN_POINTS: usize = 3;

    pub fn new(kind: Direction, points: Vec<IPoint>, width: i32, name: impl Into<String>) -> Self {
        Self {
            points,
            visible: true,
            locked: false,
            name: name.into(),
            kind,
            width,
        }
    }

    pub fn bounds(&self) -> IRect {
        geometry::door_bounds(&self.points)
    }

    /// Whether the door is drawn into baked masks.
    pub fn is_bakeable(&self) -> bool {
        self.visible && self.points.len() >= Self::MIN_POINTS
    }
}
