//! File I/O operations (open, save, export) for documents.

use super::{stem_name, Document};
use crate::background::{self, BackgroundSource};
use crate::bake;
use crate::canvas::LevelCanvas;
use crate::dialogs::FileDialogs;
use crate::serialization;
use ghosty_core::constants::PROJECT_EXTENSION;
use ghosty_core::Result;
use std::path::{Path, PathBuf};

impl Document {
    /// Creates a document whose world adopts the size of the image at `path`.
    pub fn from_image(path: &Path) -> Result<Self> {
        let (image, _) = background::load_image_file(path)?;
        let source = BackgroundSource {
            path: Some(path.to_path_buf()),
            embedded: None,
        };
        let canvas = LevelCanvas::from_background(image, source)?;
        tracing::info!(
            "Imported background {} ({}x{})",
            path.display(),
            canvas.width(),
            canvas.height()
        );
        Ok(Self::new(canvas, stem_name(path)))
    }

    /// Opens a project file. `dialogs` may be asked to locate a missing background.
    pub fn open(path: &Path, dialogs: &mut dyn FileDialogs) -> Result<Self> {
        let canvas = serialization::load_project(path, dialogs)?;
        let mut doc = Self::new(canvas, stem_name(path));
        doc.project_path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Saves to `path` and adopts it as the project path.
    ///
    /// On failure the document keeps its path and stays modified.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        let path = with_project_extension(path);
        serialization::save_project(&self.canvas, &path)?;
        self.name = stem_name(&path);
        self.project_path = Some(path);
        self.canvas.mark_clean();
        Ok(())
    }

    pub fn export_mask(&self, path: &Path) -> Result<()> {
        bake::export_mask_png(&self.canvas, path)
    }

    /// Default file name for an exported mask.
    pub fn default_mask_name(&self) -> String {
        format!("{}_mask.png", self.name)
    }
}

/// Appends the project extension when `path` has none.
pub fn with_project_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(PROJECT_EXTENSION)
    }
}
