//! Native file pickers and message boxes backed by `rfd`.

use ghosty_core::constants::PROJECT_EXTENSION;
use ghosty_editor::dialogs::{Confirm, FileDialogs, SaveChoice};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Modal native dialogs. Each call blocks until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

fn image_dialog(title: &str) -> FileDialog {
    FileDialog::new()
        .set_title(title)
        .add_filter("Images", &IMAGE_EXTENSIONS)
}

fn project_dialog(title: &str) -> FileDialog {
    FileDialog::new()
        .set_title(title)
        .add_filter("Ghosty project", &[PROJECT_EXTENSION])
}

impl FileDialogs for NativeDialogs {
    fn pick_open_image(&mut self) -> Option<PathBuf> {
        image_dialog("Open background image").pick_file()
    }

    fn pick_open_project(&mut self) -> Option<PathBuf> {
        project_dialog("Open project").pick_file()
    }

    fn pick_save_project(&mut self) -> Option<PathBuf> {
        project_dialog("Save project").save_file()
    }

    fn pick_save_mask(&mut self, initial_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Export mask")
            .add_filter("PNG image", &["png"]);
        if let Some(dir) = initial_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }

    fn locate_background(&mut self) -> Option<PathBuf> {
        let answer = MessageDialog::new()
            .set_title("Background not found")
            .set_description("The project's background image could not be found. Locate it now?")
            .set_buttons(MessageButtons::YesNo)
            .set_level(MessageLevel::Warning)
            .show();
        if answer != MessageDialogResult::Yes {
            return None;
        }
        image_dialog("Locate background image").pick_file()
    }
}

impl Confirm for NativeDialogs {
    fn ask_save_changes(&mut self, document_name: &str) -> SaveChoice {
        let answer = MessageDialog::new()
            .set_title("Unsaved changes")
            .set_description(format!("Save changes to \"{}\" before closing?", document_name))
            .set_buttons(MessageButtons::YesNoCancel)
            .set_level(MessageLevel::Warning)
            .show();
        match answer {
            MessageDialogResult::Yes => SaveChoice::Yes,
            MessageDialogResult::No => SaveChoice::No,
            _ => SaveChoice::Cancel,
        }
    }
}
