//! Tool and interaction state machine.
//!
//! Turns pointer and keyboard-level events into geometry calls and canvas
//! mutations. The active tool is one enumerated value covering both modes;
//! every transition clears the in-progress point buffers so no stale points
//! survive a tool switch.

use crate::geometry::{self, constrain_to_axis, snap_to_grid};
use crate::history::EditContext;
use crate::model::{Direction, DrawMode, ItemKind, Selection};
use ghosty_core::constants::{DOUBLE_CLICK_MS, MARKER_REMOVE_RADIUS_SQ};
use ghosty_core::IPoint;
use ghosty_settings::InputSettings;
use std::fmt;

/// Sub-tools of create mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreateTool {
    /// Freeform polyline stroke.
    #[default]
    Brush,
    /// Orthogonal polyline stroke.
    Line,
    /// Door polygon of either direction.
    Door(Direction),
}

/// Sub-tools of edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditTool {
    Move,
    Pan,
    Spawn,
    Entry(Direction),
}

/// The active tool: mode and sub-tool in one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Create(CreateTool),
    Edit(EditTool),
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Create(CreateTool::default())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Create(CreateTool::Brush) => write!(f, "brush"),
            Tool::Create(CreateTool::Line) => write!(f, "line"),
            Tool::Create(CreateTool::Door(d)) => write!(f, "door_{d}"),
            Tool::Edit(EditTool::Move) => write!(f, "move"),
            Tool::Edit(EditTool::Pan) => write!(f, "hand"),
            Tool::Edit(EditTool::Spawn) => write!(f, "spawn"),
            Tool::Edit(EditTool::Entry(d)) => write!(f, "entry_spawn_{d}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifiers relevant to pointer handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift-lock: constrain the new point to the axis of larger movement.
    pub shift: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Drag {
    Idle,
    Pan {
        last: (f64, f64),
    },
    Move {
        target: Selection,
        anchor: (f64, f64),
        original: Vec<IPoint>,
        started: bool,
    },
}

/// Interaction state shared by all documents.
#[derive(Debug, Clone)]
pub struct ToolController {
    tool: Tool,
    last_create: CreateTool,
    points: Vec<IPoint>,
    door_points: Vec<IPoint>,
    drag: Drag,
    last_click_ms: Option<u64>,
    space_held: bool,
    double_click_ms: u64,
    marker_radius_sq: i64,
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self {
            tool: Tool::default(),
            last_create: CreateTool::default(),
            points: Vec::new(),
            door_points: Vec::new(),
            drag: Drag::Idle,
            last_click_ms: None,
            space_held: false,
            double_click_ms: DOUBLE_CLICK_MS,
            marker_radius_sq: MARKER_REMOVE_RADIUS_SQ,
        }
    }

    pub fn with_settings(settings: &InputSettings) -> Self {
        Self {
            double_click_ms: settings.double_click_ms,
            marker_radius_sq: settings.marker_remove_radius_sq,
            ..Self::new()
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Stroke points buffered so far.
    pub fn pending_points(&self) -> &[IPoint] {
        &self.points
    }

    /// Door points buffered so far.
    pub fn pending_door_points(&self) -> &[IPoint] {
        &self.door_points
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != Drag::Idle
    }

    /// Switches tool. Buffers and any drag are dropped.
    pub fn set_tool(&mut self, tool: Tool) {
        if let Tool::Create(create) = tool {
            self.last_create = create;
        }
        if tool != self.tool {
            tracing::debug!("Tool {} -> {}", self.tool, tool);
        }
        self.tool = tool;
        self.reset_buffers();
    }

    /// Edit mode starts on the move tool.
    pub fn enter_edit_mode(&mut self) {
        self.set_tool(Tool::Edit(EditTool::Move));
    }

    /// Create mode resumes the last create sub-tool.
    pub fn enter_create_mode(&mut self) {
        self.set_tool(Tool::Create(self.last_create));
    }

    /// Drops in-progress points and drag state.
    pub fn reset_buffers(&mut self) {
        self.points.clear();
        self.door_points.clear();
        self.drag = Drag::Idle;
    }

    /// Space-held panning. Releasing space ends any drag.
    pub fn set_space_held(&mut self, held: bool) {
        self.space_held = held;
        if !held {
            self.drag = Drag::Idle;
        }
    }

    fn is_double_click(&mut self, now_ms: u64) -> bool {
        let double = self
            .last_click_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= self.double_click_ms);
        self.last_click_ms = Some(now_ms);
        double
    }

    /// Handles a button press at screen position `screen`. `now_ms` is a
    /// monotonic timestamp used for double-click detection.
    pub fn pointer_down(
        &mut self,
        ctx: &mut EditContext<'_>,
        button: PointerButton,
        screen: (f64, f64),
        modifiers: Modifiers,
        now_ms: u64,
    ) {
        if !ctx.viewport.contains_screen(screen.0, screen.1) {
            return;
        }
        let (raw_x, raw_y) = ctx.viewport.screen_to_world(screen.0, screen.1);
        let (mut wx, mut wy) = (raw_x, raw_y);
        if ctx.canvas.grid_on() {
            (wx, wy) = snap_to_grid(wx, wy, ctx.canvas.grid_size());
        }
        let double = self.is_double_click(now_ms);

        let pan_gesture = (self.space_held && button == PointerButton::Primary)
            || button == PointerButton::Middle
            || (self.tool == Tool::Edit(EditTool::Pan) && button == PointerButton::Primary);
        if pan_gesture {
            self.drag = Drag::Pan { last: screen };
            return;
        }

        match self.tool {
            Tool::Edit(EditTool::Spawn) => {
                ctx.push_undo();
                let spawn = match button {
                    PointerButton::Primary => Some(IPoint::truncate(wx, wy)),
                    _ => None,
                };
                ctx.canvas.set_spawn(spawn);
            }
            Tool::Edit(EditTool::Entry(direction)) => {
                let p = IPoint::truncate(wx, wy);
                if button == PointerButton::Primary {
                    ctx.push_undo();
                    ctx.canvas.add_entry(direction, p);
                } else if let Some(idx) =
                    ctx.canvas
                        .nearest_entry(direction, p, self.marker_radius_sq)
                {
                    ctx.push_undo();
                    ctx.canvas.remove_entry(direction, idx);
                }
            }
            Tool::Edit(EditTool::Move) if button == PointerButton::Primary => {
                self.begin_move(ctx, raw_x, raw_y);
            }
            Tool::Create(CreateTool::Door(direction)) => match button {
                PointerButton::Primary => {
                    if double && self.door_points.len() >= 3 {
                        self.commit_door(ctx, direction);
                    } else {
                        let p = self.place(&self.door_points, wx, wy, modifiers);
                        self.door_points.push(p);
                    }
                }
                PointerButton::Secondary => {
                    self.door_points.pop();
                }
                PointerButton::Middle => {}
            },
            Tool::Create(create) if button == PointerButton::Primary => {
                if double && self.points.len() >= 2 {
                    self.commit_stroke(ctx, create);
                } else {
                    let p = self.place(&self.points, wx, wy, modifiers);
                    self.points.push(p);
                }
            }
            _ => {}
        }
    }

    fn place(&self, buffer: &[IPoint], wx: f64, wy: f64, modifiers: Modifiers) -> IPoint {
        let (x, y) = match buffer.last() {
            Some(&anchor) if modifiers.shift => constrain_to_axis(anchor, wx, wy),
            _ => (wx, wy),
        };
        IPoint::truncate(x, y)
    }

    fn begin_move(&mut self, ctx: &mut EditContext<'_>, wx: f64, wy: f64) {
        let canvas = &*ctx.canvas;
        let door = geometry::hit_test_doors(canvas.doors(), wx, wy)
            .map(Selection::door)
            .filter(|s| !canvas.is_locked(*s));
        let target = door.or_else(|| {
            geometry::hit_test_strokes(canvas.strokes(), wx, wy)
                .map(Selection::stroke)
                .filter(|s| !canvas.is_locked(*s))
        });
        let Some(target) = target else {
            return;
        };
        let Some(original) = canvas.item_points(target).map(<[IPoint]>::to_vec) else {
            return;
        };
        ctx.canvas.select(Some(target));
        self.drag = Drag::Move {
            target,
            anchor: (wx, wy),
            original,
            started: false,
        };
    }

    /// Handles pointer motion while a button is held.
    pub fn pointer_move(&mut self, ctx: &mut EditContext<'_>, screen: (f64, f64)) {
        match &mut self.drag {
            Drag::Idle => {}
            Drag::Pan { last } => {
                ctx.viewport.pan_by(screen.0 - last.0, screen.1 - last.1);
                *last = screen;
            }
            Drag::Move {
                target,
                anchor,
                original,
                started,
            } => {
                if ctx.canvas.is_locked(*target) || !ctx.canvas.contains(*target) {
                    return;
                }
                let (wx, wy) = ctx.viewport.screen_to_world(screen.0, screen.1);
                if !*started {
                    ctx.push_undo();
                    *started = true;
                }
                let (dx, dy) = (wx - anchor.0, wy - anchor.1);
                if let Err(e) = ctx.canvas.translate_item(*target, original, dx, dy) {
                    tracing::warn!("Move aborted: {}", e);
                }
            }
        }
    }

    /// Ends any drag. No snapshot is taken here.
    pub fn pointer_up(&mut self, _button: PointerButton) {
        self.drag = Drag::Idle;
    }

    /// Finalises the buffered shape of the current create tool (Enter).
    pub fn commit(&mut self, ctx: &mut EditContext<'_>) -> bool {
        match self.tool {
            Tool::Create(CreateTool::Door(direction)) if self.door_points.len() >= 3 => {
                self.commit_door(ctx, direction)
            }
            Tool::Create(create @ (CreateTool::Brush | CreateTool::Line))
                if self.points.len() >= 2 =>
            {
                self.commit_stroke(ctx, create)
            }
            _ => false,
        }
    }

    /// Discards the buffered door points (Escape).
    pub fn cancel_door(&mut self) {
        if matches!(self.tool, Tool::Create(CreateTool::Door(_))) {
            self.door_points.clear();
        }
    }

    fn commit_stroke(&mut self, ctx: &mut EditContext<'_>, create: CreateTool) -> bool {
        let (mode, base) = match create {
            CreateTool::Line => (
                DrawMode::OrthogonalPolyline,
                geometry::orthogonalize(&self.points),
            ),
            _ => (DrawMode::Polyline, std::mem::take(&mut self.points)),
        };
        self.points.clear();
        let points = with_mirrors(ctx, base);
        ctx.push_undo();
        ctx.canvas.commit_stroke(mode, points).is_some()
    }

    fn commit_door(&mut self, ctx: &mut EditContext<'_>, direction: Direction) -> bool {
        let base = std::mem::take(&mut self.door_points);
        let points = with_mirrors(ctx, base);
        ctx.push_undo();
        ctx.canvas.commit_door(direction, points).is_some()
    }

    /// Steps the selection by one in the flat stroke/door order.
    pub fn cycle_selection(&self, ctx: &mut EditContext<'_>, forward: bool) {
        ctx.canvas.select_step(forward);
    }

    /// Moves the selected stroke up or down the z-order.
    pub fn reorder_selection(&self, ctx: &mut EditContext<'_>, delta: isize) -> bool {
        match ctx.canvas.selection() {
            Some(sel) if sel.kind == ItemKind::Stroke => ctx.canvas.reorder_selected(delta),
            _ => false,
        }
    }
}

fn with_mirrors(ctx: &EditContext<'_>, mut base: Vec<IPoint>) -> Vec<IPoint> {
    let (sym_x, sym_y) = ctx.canvas.symmetry();
    let (w, h) = ctx.canvas.world_size();
    let mirrored = geometry::mirror_points(&base, w, h, sym_x, sym_y);
    base.extend(mirrored);
    base
}
