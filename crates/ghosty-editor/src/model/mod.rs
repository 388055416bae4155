//! Editable level items: wall strokes, door polygons and the selection that
//! points into them.

mod door;
mod stroke;

pub use door::Door;
pub use stroke::{DrawMode, Stroke};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traversal direction of a door or an entry marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Next,
    Back,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Back => write!(f, "back"),
        }
    }
}

/// Which item collection a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Stroke,
    Door,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Stroke => write!(f, "stroke"),
            ItemKind::Door => write!(f, "door"),
        }
    }
}

/// A selected item, addressed by collection and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub kind: ItemKind,
    pub index: usize,
}

impl Selection {
    pub fn stroke(index: usize) -> Self {
        Self {
            kind: ItemKind::Stroke,
            index,
        }
    }

    pub fn door(index: usize) -> Self {
        Self {
            kind: ItemKind::Door,
            index,
        }
    }
}

/// Drops the characters reserved for list decorations and trims whitespace.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '<' | '>' | '◄' | '►'))
        .collect::<String>()
        .trim()
        .to_string()
}
