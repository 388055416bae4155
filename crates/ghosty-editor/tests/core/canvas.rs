use ghosty_core::constants::{MASK_DRAW_COLOR, MASK_ERASE_COLOR, PREVIEW_ALPHA_MAX, PREVIEW_ALPHA_MIN};
use ghosty_core::IPoint;
use ghosty_editor::raster::pixel_at;
use ghosty_editor::{Direction, DrawMode, LevelCanvas, Selection};

fn stroke_pts(y: i32) -> Vec<IPoint> {
    vec![IPoint::new(2, y), IPoint::new(50, y), IPoint::new(50, y + 20)]
}

#[test]
fn test_mask_is_pure_function_of_visible_strokes() {
    let mut a = LevelCanvas::new(64, 64).unwrap();
    a.commit_stroke(DrawMode::Polyline, stroke_pts(5));
    a.commit_stroke(DrawMode::OrthogonalPolyline, vec![IPoint::new(4, 40), IPoint::new(30, 60)]);

    let mut b = LevelCanvas::new(64, 64).unwrap();
    b.commit_stroke(DrawMode::Polyline, stroke_pts(30));
    b.commit_stroke(DrawMode::Polyline, stroke_pts(5));
    b.commit_stroke(DrawMode::OrthogonalPolyline, vec![IPoint::new(4, 40), IPoint::new(30, 60)]);
    b.toggle_visible(Selection::stroke(0)).unwrap();
    b.update_mask();
    b.update_mask();

    assert_eq!(a.mask().data(), b.mask().data());
}

#[test]
fn test_hidden_stroke_leaves_no_residue() {
    let mut c = LevelCanvas::new(64, 64).unwrap();
    let blank = c.mask().data().to_vec();
    c.commit_stroke(DrawMode::Polyline, stroke_pts(10));
    assert_eq!(pixel_at(c.mask(), 20, 10), Some(MASK_DRAW_COLOR));
    c.toggle_visible(Selection::stroke(0)).unwrap();
    assert_eq!(c.mask().data(), blank.as_slice());
}

#[test]
fn test_duplicate_selects_copy() {
    let mut c = LevelCanvas::new(64, 64).unwrap();
    c.commit_door(
        Direction::Next,
        vec![IPoint::new(0, 0), IPoint::new(8, 0), IPoint::new(8, 8)],
    );
    c.select(Some(Selection::door(0)));
    assert!(c.duplicate_selected());
    assert_eq!(c.doors().len(), 2);
    assert_eq!(c.selection(), Some(Selection::door(1)));
    assert_eq!(c.doors()[0], c.doors()[1]);
}

#[test]
fn test_rename_sanitizes() {
    let mut c = LevelCanvas::new(16, 16).unwrap();
    c.commit_stroke(DrawMode::Polyline, vec![IPoint::new(1, 1)]);
    c.rename(Selection::stroke(0), "  ◄Outer wall► ").unwrap();
    assert_eq!(c.strokes()[0].name, "Outer wall");
    assert!(c.rename(Selection::door(0), "x").is_err());
}

#[test]
fn test_select_step_wraps_through_strokes_then_doors() {
    let mut c = LevelCanvas::new(32, 32).unwrap();
    c.commit_stroke(DrawMode::Polyline, vec![IPoint::new(1, 1)]);
    c.commit_door(
        Direction::Back,
        vec![IPoint::new(0, 0), IPoint::new(8, 0), IPoint::new(8, 8)],
    );
    c.select_next();
    assert_eq!(c.selection(), Some(Selection::stroke(0)));
    c.select_next();
    assert_eq!(c.selection(), Some(Selection::door(0)));
    c.select_next();
    assert_eq!(c.selection(), Some(Selection::stroke(0)));
    c.select_previous();
    assert_eq!(c.selection(), Some(Selection::door(0)));
}

#[test]
fn test_reorder_changes_z_order() {
    let mut c = LevelCanvas::new(32, 32).unwrap();
    c.commit_stroke(DrawMode::Polyline, vec![IPoint::new(1, 1)]);
    c.commit_stroke(DrawMode::Polyline, vec![IPoint::new(9, 9)]);
    c.select(Some(Selection::stroke(0)));
    assert!(c.reorder_selected(1));
    assert_eq!(c.strokes()[1].name, "Stroke 00");
    assert_eq!(c.selection(), Some(Selection::stroke(1)));
    assert!(!c.reorder_selected(1));
}

#[test]
fn test_parameters_are_clamped() {
    let mut c = LevelCanvas::new(16, 16).unwrap();
    c.adjust_brush_width(-10);
    assert_eq!(c.brush_width(), 1);
    c.set_brush_width(1000);
    assert_eq!(c.brush_width(), 150);
    c.set_preview_alpha(0);
    assert_eq!(c.preview_alpha(), PREVIEW_ALPHA_MIN);
    c.adjust_preview_alpha(1000);
    assert_eq!(c.preview_alpha(), PREVIEW_ALPHA_MAX);
}

#[test]
fn test_clear_all_removes_everything() {
    let mut c = LevelCanvas::new(32, 32).unwrap();
    c.commit_stroke(DrawMode::Polyline, stroke_pts(4));
    c.commit_door(
        Direction::Next,
        vec![IPoint::new(0, 0), IPoint::new(8, 0), IPoint::new(8, 8)],
    );
    c.set_spawn(Some(IPoint::new(1, 1)));
    c.add_entry(Direction::Back, IPoint::new(2, 2));
    c.clear_all();
    assert!(c.strokes().is_empty());
    assert!(c.doors().is_empty());
    assert_eq!(c.spawn(), None);
    assert!(c.entries(Direction::Back).is_empty());
    assert_eq!(pixel_at(c.mask(), 10, 4), Some(MASK_ERASE_COLOR));
}

#[test]
fn test_set_world_size_reallocates_mask() {
    let mut c = LevelCanvas::new(32, 32).unwrap();
    c.set_world_size(100, 50).unwrap();
    assert_eq!((c.mask().width(), c.mask().height()), (100, 50));
    assert!(c.set_world_size(0, 50).is_err());
    assert_eq!(c.world_size(), (100, 50));
}

#[test]
fn test_scaled_layers_follow_zoom() {
    let mut c = LevelCanvas::new(20, 10).unwrap();
    let layers = c.scaled_layers(2.0);
    assert_eq!(layers.mask.as_ref().map(|m| m.dimensions()), Some((40, 20)));
}
