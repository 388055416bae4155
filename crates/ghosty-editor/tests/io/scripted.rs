//! Dialog fake answering from a script.

use ghosty_editor::{Confirm, FileDialogs, SaveChoice};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Answers consumed in order. An exhausted script behaves like a dismissed
/// dialog.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    paths: VecDeque<Option<PathBuf>>,
    choices: VecDeque<SaveChoice>,
    /// Names passed to `ask_save_changes`, in call order.
    pub asked: Vec<String>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push_back(Some(path.into()));
        self
    }

    pub fn with_cancelled_path(mut self) -> Self {
        self.paths.push_back(None);
        self
    }

    pub fn with_choice(mut self, choice: SaveChoice) -> Self {
        self.choices.push_back(choice);
        self
    }

    fn next_path(&mut self) -> Option<PathBuf> {
        self.paths.pop_front().flatten()
    }
}

impl FileDialogs for ScriptedDialogs {
    fn pick_open_image(&mut self) -> Option<PathBuf> {
        self.next_path()
    }

    fn pick_open_project(&mut self) -> Option<PathBuf> {
        self.next_path()
    }

    fn pick_save_project(&mut self) -> Option<PathBuf> {
        self.next_path()
    }

    fn pick_save_mask(&mut self, _initial_dir: Option<&Path>) -> Option<PathBuf> {
        self.next_path()
    }

    fn locate_background(&mut self) -> Option<PathBuf> {
        self.next_path()
    }
}

impl Confirm for ScriptedDialogs {
    fn ask_save_changes(&mut self, document_name: &str) -> SaveChoice {
        self.asked.push(document_name.to_string());
        self.choices.pop_front().unwrap_or(SaveChoice::Cancel)
    }
}

#[test]
fn test_scripted_answers_in_order() {
    let mut d = ScriptedDialogs::new()
        .with_path("/a")
        .with_cancelled_path()
        .with_choice(SaveChoice::No);
    assert_eq!(d.pick_open_image(), Some(PathBuf::from("/a")));
    assert_eq!(d.pick_save_project(), None);
    assert_eq!(d.pick_save_project(), None);
    assert_eq!(d.ask_save_changes("x"), SaveChoice::No);
    assert_eq!(d.ask_save_changes("y"), SaveChoice::Cancel);
    assert_eq!(d.asked, vec!["x", "y"]);
}
