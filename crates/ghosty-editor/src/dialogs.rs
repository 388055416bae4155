//! Narrow contracts for the interactive collaborators the editor needs.
//!
//! A dismissed dialog is reported as `None` (or [`SaveChoice::Cancel`]) and
//! is never an error.

use std::path::{Path, PathBuf};

/// Answer to the save-before-close question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Yes,
    No,
    Cancel,
}

/// File-picker capability.
pub trait FileDialogs {
    fn pick_open_image(&mut self) -> Option<PathBuf>;

    fn pick_open_project(&mut self) -> Option<PathBuf>;

    fn pick_save_project(&mut self) -> Option<PathBuf>;

    /// Picks the exported mask path, starting in `initial_dir` when known.
    fn pick_save_mask(&mut self, initial_dir: Option<&Path>) -> Option<PathBuf>;

    /// Asked once when a project's background cannot be resolved.
    fn locate_background(&mut self) -> Option<PathBuf>;
}

/// Yes/no/cancel confirmation capability.
pub trait Confirm {
    fn ask_save_changes(&mut self, document_name: &str) -> SaveChoice;
}

/// Dialogs that are always dismissed. Used for headless operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialogs;

impl FileDialogs for NoDialogs {
    fn pick_open_image(&mut self) -> Option<PathBuf> {
        None
    }

    fn pick_open_project(&mut self) -> Option<PathBuf> {
        None
    }

    fn pick_save_project(&mut self) -> Option<PathBuf> {
        None
    }

    fn pick_save_mask(&mut self, _initial_dir: Option<&Path>) -> Option<PathBuf> {
        None
    }

    fn locate_background(&mut self) -> Option<PathBuf> {
        None
    }
}

impl Confirm for NoDialogs {
    fn ask_save_changes(&mut self, _document_name: &str) -> SaveChoice {
        SaveChoice::Cancel
    }
}
