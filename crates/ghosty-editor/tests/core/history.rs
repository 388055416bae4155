use ghosty_core::IPoint;
use ghosty_editor::{
    Direction, DrawMode, EditContext, History, LevelCanvas, Selection, Snapshot, Viewport,
};

#[test]
fn test_undo_redo_inverse_over_sequence() {
    let mut canvas = LevelCanvas::new(64, 64).unwrap();
    let mut viewport = Viewport::default();
    let mut history = History::default();
    let mut ctx = EditContext::new(&mut canvas, &mut viewport, &mut history);

    let mut states = vec![Snapshot::capture(ctx.canvas, ctx.viewport)];

    ctx.push_undo();
    ctx.canvas
        .commit_stroke(DrawMode::Polyline, vec![IPoint::new(1, 1), IPoint::new(30, 1)]);
    states.push(Snapshot::capture(ctx.canvas, ctx.viewport));

    ctx.push_undo();
    ctx.canvas.commit_door(
        Direction::Back,
        vec![IPoint::new(0, 0), IPoint::new(9, 0), IPoint::new(9, 9)],
    );
    ctx.canvas.select(Some(Selection::door(0)));
    states.push(Snapshot::capture(ctx.canvas, ctx.viewport));

    ctx.push_undo();
    ctx.canvas.set_spawn(Some(IPoint::new(5, 5)));
    ctx.canvas.add_entry(Direction::Next, IPoint::new(6, 6));
    ctx.canvas.toggle_sym_x();
    ctx.viewport.set_state(2.5, -10.0, 4.0);
    states.push(Snapshot::capture(ctx.canvas, ctx.viewport));

    assert!(ctx.delete_selected());
    states.push(Snapshot::capture(ctx.canvas, ctx.viewport));

    for expected in states.iter().rev().skip(1) {
        assert!(ctx.undo());
        assert_eq!(&Snapshot::capture(ctx.canvas, ctx.viewport), expected);
    }
    assert!(!ctx.undo());

    for expected in states.iter().skip(1) {
        assert!(ctx.redo());
        assert_eq!(&Snapshot::capture(ctx.canvas, ctx.viewport), expected);
    }
    assert!(!ctx.redo());
}

#[test]
fn test_undo_regenerates_mask() {
    let mut canvas = LevelCanvas::new(32, 32).unwrap();
    let blank = canvas.mask().data().to_vec();
    let mut viewport = Viewport::default();
    let mut history = History::default();
    let mut ctx = EditContext::new(&mut canvas, &mut viewport, &mut history);

    ctx.push_undo();
    ctx.canvas
        .commit_stroke(DrawMode::Polyline, vec![IPoint::new(2, 2), IPoint::new(20, 2)]);
    assert_ne!(ctx.canvas.mask().data(), blank.as_slice());
    ctx.undo();
    assert_eq!(ctx.canvas.mask().data(), blank.as_slice());
}

#[test]
fn test_129th_push_drops_oldest() {
    let mut canvas = LevelCanvas::new(8, 8).unwrap();
    let mut viewport = Viewport::default();
    let mut history = History::default();
    let mut ctx = EditContext::new(&mut canvas, &mut viewport, &mut history);

    for i in 0..129 {
        ctx.canvas.set_brush_width(1 + i % 100);
        ctx.push_undo();
    }
    assert_eq!(ctx.history.undo_depth(), 128);

    while ctx.undo() {}
    // The snapshot taken at brush width 1 was the one dropped.
    assert_eq!(ctx.canvas.brush_width(), 2);
}

#[test]
fn test_new_push_clears_redo() {
    let mut canvas = LevelCanvas::new(8, 8).unwrap();
    let mut viewport = Viewport::default();
    let mut history = History::default();
    let mut ctx = EditContext::new(&mut canvas, &mut viewport, &mut history);

    ctx.push_undo();
    ctx.canvas.toggle_grid();
    ctx.undo();
    assert!(ctx.history.can_redo());
    ctx.clear_all();
    assert!(!ctx.history.can_redo());
}
