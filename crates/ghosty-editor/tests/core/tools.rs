use ghosty_core::IPoint;
use ghosty_editor::{
    CreateTool, Direction, DrawMode, EditContext, EditTool, History, LevelCanvas, Modifiers,
    PointerButton, Selection, Tool, ToolController, ViewRect, Viewport,
};

struct Bench {
    canvas: LevelCanvas,
    viewport: Viewport,
    history: History,
    tools: ToolController,
    clock: u64,
}

impl Bench {
    fn new() -> Self {
        Self {
            canvas: LevelCanvas::new(200, 200).unwrap(),
            viewport: Viewport::new(ViewRect::new(100.0, 50.0, 800.0, 600.0)),
            history: History::default(),
            tools: ToolController::new(),
            clock: 0,
        }
    }

    fn press(&mut self, button: PointerButton, world: (f64, f64), shift: bool, gap_ms: u64) {
        self.clock += gap_ms;
        let screen = self.viewport.world_to_screen(world.0, world.1);
        let mut ctx = EditContext::new(&mut self.canvas, &mut self.viewport, &mut self.history);
        self.tools
            .pointer_down(&mut ctx, button, screen, Modifiers { shift }, self.clock);
    }

    fn click(&mut self, world: (f64, f64)) {
        self.press(PointerButton::Primary, world, false, 1000);
    }

    fn double_click(&mut self, world: (f64, f64)) {
        self.press(PointerButton::Primary, world, false, 1000);
        self.press(PointerButton::Primary, world, false, 150);
    }

    fn drag_to(&mut self, world: (f64, f64)) {
        let screen = self.viewport.world_to_screen(world.0, world.1);
        let mut ctx = EditContext::new(&mut self.canvas, &mut self.viewport, &mut self.history);
        self.tools.pointer_move(&mut ctx, screen);
    }

    fn enter(&mut self) -> bool {
        let mut ctx = EditContext::new(&mut self.canvas, &mut self.viewport, &mut self.history);
        self.tools.commit(&mut ctx)
    }
}

#[test]
fn test_clicks_map_through_zoom_and_pan() {
    let mut b = Bench::new();
    b.viewport.set_state(2.0, 30.0, -20.0);
    b.click((40.0, 60.0));
    b.click((80.0, 60.0));
    assert_eq!(
        b.tools.pending_points(),
        &[IPoint::new(40, 60), IPoint::new(80, 60)]
    );
}

#[test]
fn test_double_click_commits_without_extra_point() {
    let mut b = Bench::new();
    b.click((10.0, 10.0));
    b.double_click((60.0, 10.0));
    assert_eq!(b.canvas.strokes().len(), 1);
    assert_eq!(
        b.canvas.strokes()[0].points,
        vec![IPoint::new(10, 10), IPoint::new(60, 10)]
    );
    assert_eq!(b.canvas.strokes()[0].name, "Stroke 00");
}

#[test]
fn test_slow_clicks_keep_buffering() {
    let mut b = Bench::new();
    b.click((10.0, 10.0));
    b.click((20.0, 10.0));
    b.press(PointerButton::Primary, (30.0, 10.0), false, 401);
    assert_eq!(b.tools.pending_points().len(), 3);
    assert!(b.canvas.strokes().is_empty());
}

#[test]
fn test_line_tool_with_symmetry() {
    let mut b = Bench::new();
    b.canvas.toggle_sym_y();
    b.tools.set_tool(Tool::Create(CreateTool::Line));
    b.click((10.0, 10.0));
    b.click((30.0, 40.0));
    assert!(b.enter());
    let stroke = &b.canvas.strokes()[0];
    assert_eq!(stroke.mode, DrawMode::OrthogonalPolyline);
    assert_eq!(
        stroke.points,
        vec![
            IPoint::new(10, 10),
            IPoint::new(10, 40),
            IPoint::new(30, 40),
            IPoint::new(10, 190),
            IPoint::new(10, 160),
            IPoint::new(30, 160),
        ]
    );
}

#[test]
fn test_shift_lock_after_grid_snap() {
    let mut b = Bench::new();
    b.canvas.toggle_grid();
    b.click((9.0, 9.0));
    b.press(PointerButton::Primary, (45.0, 13.0), true, 1000);
    assert_eq!(
        b.tools.pending_points(),
        &[IPoint::new(8, 8), IPoint::new(48, 8)]
    );
}

#[test]
fn test_door_tool_commits_tagged_door() {
    let mut b = Bench::new();
    b.tools.set_tool(Tool::Create(CreateTool::Door(Direction::Back)));
    b.click((10.0, 10.0));
    b.click((50.0, 10.0));
    b.click((50.0, 50.0));
    assert!(b.enter());
    assert_eq!(b.canvas.doors()[0].kind, Direction::Back);
    assert!(b.tools.pending_door_points().is_empty());
    assert_eq!(b.history.undo_depth(), 1);
}

#[test]
fn test_move_door_before_stroke() {
    let mut b = Bench::new();
    b.canvas
        .commit_stroke(DrawMode::Polyline, vec![IPoint::new(0, 20), IPoint::new(60, 20)]);
    b.canvas.commit_door(
        Direction::Next,
        vec![IPoint::new(10, 10), IPoint::new(30, 10), IPoint::new(30, 30)],
    );
    b.tools.enter_edit_mode();
    b.click((20.0, 20.0));
    assert_eq!(b.canvas.selection(), Some(Selection::door(0)));

    b.drag_to((25.0, 23.0));
    b.drag_to((30.0, 20.0));
    b.tools.pointer_up(PointerButton::Primary);
    assert_eq!(
        b.canvas.doors()[0].points,
        vec![IPoint::new(20, 10), IPoint::new(40, 10), IPoint::new(40, 30)]
    );
    assert_eq!(b.history.undo_depth(), 1);

    let mut ctx = EditContext::new(&mut b.canvas, &mut b.viewport, &mut b.history);
    assert!(ctx.undo());
    assert_eq!(ctx.canvas.doors()[0].points[0], IPoint::new(10, 10));
}

#[test]
fn test_click_without_drag_takes_no_snapshot() {
    let mut b = Bench::new();
    b.canvas
        .commit_stroke(DrawMode::Polyline, vec![IPoint::new(0, 20), IPoint::new(60, 20)]);
    b.tools.enter_edit_mode();
    b.click((30.0, 20.0));
    b.tools.pointer_up(PointerButton::Primary);
    assert_eq!(b.history.undo_depth(), 0);
    assert_eq!(b.canvas.selection(), Some(Selection::stroke(0)));
}

#[test]
fn test_space_pan_in_create_mode() {
    let mut b = Bench::new();
    b.tools.set_space_held(true);
    b.click((10.0, 10.0));
    assert!(b.tools.pending_points().is_empty());
    assert!(b.tools.is_dragging());
    b.drag_to((20.0, 15.0));
    assert_eq!(b.viewport.pan(), (10.0, 5.0));
    b.tools.set_space_held(false);
    assert!(!b.tools.is_dragging());
}

#[test]
fn test_entry_back_markers() {
    let mut b = Bench::new();
    b.tools.set_tool(Tool::Edit(EditTool::Entry(Direction::Back)));
    b.click((10.0, 10.0));
    b.click((100.0, 100.0));
    b.press(PointerButton::Secondary, (101.0, 99.0), false, 1000);
    assert_eq!(b.canvas.entries(Direction::Back), &[IPoint::new(10, 10)]);
    assert!(b.canvas.entries(Direction::Next).is_empty());
}

#[test]
fn test_tool_display_names() {
    assert_eq!(Tool::Create(CreateTool::Door(Direction::Back)).to_string(), "door_back");
    assert_eq!(Tool::Edit(EditTool::Entry(Direction::Next)).to_string(), "entry_spawn_next");
    assert_eq!(Tool::Edit(EditTool::Pan).to_string(), "hand");
}
