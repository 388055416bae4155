//! One open document: a level canvas plus its file identity.
//!
//! The canvas is owned exclusively by the document. The undo history lives
//! on the [`DocumentManager`](crate::documents::DocumentManager) while the
//! document is active and is parked here otherwise.

mod file_io;

use crate::canvas::LevelCanvas;
use crate::history::History;
use std::path::{Path, PathBuf};

/// A document shown in one tab.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) canvas: LevelCanvas,
    name: String,
    project_path: Option<PathBuf>,
    pub(crate) parked_history: History,
}

impl Document {
    pub fn new(canvas: LevelCanvas, name: impl Into<String>) -> Self {
        Self {
            canvas,
            name: name.into(),
            project_path: None,
            parked_history: History::default(),
        }
    }

    pub fn canvas(&self) -> &LevelCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut LevelCanvas {
        &mut self.canvas
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.canvas.is_modified()
    }

    /// Tab label: the name, with a trailing `*` while there are unsaved changes.
    pub fn display_name(&self) -> String {
        if self.is_modified() {
            format!("{}*", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Directory of the project file, used as the starting point for exports.
    pub fn project_dir(&self) -> Option<&Path> {
        self.project_path.as_deref().and_then(Path::parent)
    }
}

pub(crate) fn stem_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
