use crate::scripted::ScriptedDialogs;
use ghosty_core::IPoint;
use ghosty_editor::{
    Direction, Document, DocumentManager, DrawMode, LevelCanvas, Modifiers, NoDialogs,
    PointerButton, SaveChoice,
};
use image::{Rgb, RgbImage};

fn dirty_doc(name: &str) -> Document {
    let mut canvas = LevelCanvas::new(32, 32).unwrap();
    canvas.commit_stroke(DrawMode::Polyline, vec![IPoint::new(1, 1), IPoint::new(20, 1)]);
    Document::new(canvas, name)
}

#[test]
fn test_new_from_image_adopts_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forest.png");
    RgbImage::from_pixel(64, 48, Rgb([1, 2, 3])).save(&path).unwrap();

    let mut m = DocumentManager::default();
    let index = m.new_from_image(&path).unwrap();
    let doc = &m.documents()[index];
    assert_eq!(doc.name(), "forest");
    assert_eq!(doc.canvas().world_size(), (64, 48));
    assert!(!doc.is_modified());
}

#[test]
fn test_dismissed_open_dialog_is_not_an_error() {
    let mut m = DocumentManager::default();
    assert_eq!(m.open_image_dialog(&mut NoDialogs).unwrap(), None);
    assert_eq!(m.open_project_dialog(&mut NoDialogs).unwrap(), None);
    assert!(m.is_empty());
}

#[test]
fn test_close_cancel_keeps_tab() {
    let mut m = DocumentManager::default();
    m.add_document(dirty_doc("a")).unwrap();
    let mut d = ScriptedDialogs::new().with_choice(SaveChoice::Cancel);
    assert!(!m.close(0, &mut NoDialogs, &mut d).unwrap());
    assert_eq!(m.len(), 1);
    assert_eq!(d.asked, vec!["a"]);
}

#[test]
fn test_close_yes_with_cancelled_save_keeps_tab() {
    let mut m = DocumentManager::default();
    m.add_document(dirty_doc("a")).unwrap();
    let mut confirm = ScriptedDialogs::new().with_choice(SaveChoice::Yes);
    let mut files = ScriptedDialogs::new().with_cancelled_path();
    assert!(!m.close(0, &mut files, &mut confirm).unwrap());
    assert_eq!(m.len(), 1);
    assert!(m.documents()[0].is_modified());
}

#[test]
fn test_close_yes_saves_then_closes() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("saved");
    let mut m = DocumentManager::default();
    m.add_document(dirty_doc("a")).unwrap();
    let mut confirm = ScriptedDialogs::new().with_choice(SaveChoice::Yes);
    let mut files = ScriptedDialogs::new().with_path(target);
    assert!(m.close(0, &mut files, &mut confirm).unwrap());
    assert!(m.is_empty());
    assert!(dir.path().join("saved.xzenp").is_file());
}

#[test]
fn test_close_no_discards() {
    let mut m = DocumentManager::default();
    m.add_document(dirty_doc("a")).unwrap();
    m.add_document(dirty_doc("b")).unwrap();
    let mut confirm = ScriptedDialogs::new().with_choice(SaveChoice::No);
    assert!(m.close(1, &mut NoDialogs, &mut confirm).unwrap());
    assert_eq!(m.len(), 1);
    assert_eq!(m.active_index(), Some(0));
}

#[test]
fn test_save_prompts_only_without_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut m = DocumentManager::default();
    m.add_document(dirty_doc("a")).unwrap();

    let mut files = ScriptedDialogs::new().with_path(dir.path().join("one.xzenp"));
    assert!(m.save_active(&mut files, false).unwrap());
    assert!(!m.active_document().unwrap().is_modified());

    m.context().unwrap().canvas.toggle_grid();
    // No answer scripted: a second prompt would come back dismissed.
    assert!(m.save_active(&mut NoDialogs, false).unwrap());
    assert!(!m.save_active(&mut NoDialogs, true).unwrap());
}

#[test]
fn test_open_project_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("cave.xzenp");
    let mut doc = dirty_doc("cave");
    doc.canvas_mut().set_spawn(Some(IPoint::new(3, 3)));
    doc.save_to(&project).unwrap();

    let mut m = DocumentManager::default();
    let mut files = ScriptedDialogs::new().with_path(project.clone());
    let index = m.open_project_dialog(&mut files).unwrap();
    assert_eq!(index, Some(0));
    assert_eq!(m.active_document().unwrap().project_path(), Some(project.as_path()));

    let mask = dir.path().join("cave_mask.png");
    let mut files = ScriptedDialogs::new().with_path(mask.clone());
    assert!(m.export_active_mask(&mut files).unwrap());
    let img = image::open(&mask).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0]);
    assert!(!m.export_active_mask(&mut NoDialogs).unwrap());
}

#[test]
fn test_pointer_events_reach_active_tab() {
    let mut m = DocumentManager::default();
    m.add_document(Document::new(LevelCanvas::new(100, 100).unwrap(), "a")).unwrap();
    m.add_document(Document::new(LevelCanvas::new(100, 100).unwrap(), "b")).unwrap();
    m.set_tool(ghosty_editor::Tool::Edit(ghosty_editor::EditTool::Entry(Direction::Next)));

    let screen = m.viewport().world_to_screen(50.0, 50.0);
    m.pointer_down(PointerButton::Primary, screen, Modifiers::default(), 0);
    assert_eq!(m.documents()[1].canvas().entries(Direction::Next).len(), 1);
    assert!(m.documents()[0].canvas().entries(Direction::Next).is_empty());

    assert!(m.undo());
    assert!(m.documents()[1].canvas().entries(Direction::Next).is_empty());
    assert!(m.redo());

    m.switch_to(0).unwrap();
    assert!(!m.undo());
}

#[test]
fn test_tab_switch_drops_buffered_points() {
    let mut m = DocumentManager::default();
    m.add_document(Document::new(LevelCanvas::new(100, 100).unwrap(), "a")).unwrap();
    m.add_document(Document::new(LevelCanvas::new(100, 100).unwrap(), "b")).unwrap();
    let screen = m.viewport().world_to_screen(10.0, 10.0);
    m.pointer_down(PointerButton::Primary, screen, Modifiers::default(), 0);
    assert_eq!(m.tools().pending_points().len(), 1);
    m.switch_to(0).unwrap();
    assert!(m.tools().pending_points().is_empty());
}
