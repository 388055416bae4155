//! Undo/redo by full snapshots of the editable state.
//!
//! A [`Snapshot`] is a deep copy of everything the user can change through
//! editing (items, markers, selection, parameters) plus the view. Snapshots
//! are pushed immediately *before* a destructive mutation.

use crate::canvas::LevelCanvas;
use crate::model::{Door, Selection, Stroke};
use crate::viewport::Viewport;
use ghosty_core::constants::UNDO_DEPTH;
use ghosty_core::IPoint;

/// Deep copy of the editable state of one canvas and the view.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    strokes: Vec<Stroke>,
    doors: Vec<Door>,
    selection: Option<Selection>,
    brush_width: i32,
    preview_alpha: i32,
    grid_on: bool,
    grid_size: i32,
    simplify_on: bool,
    sym_x: bool,
    sym_y: bool,
    spawn: Option<IPoint>,
    zoom: f64,
    pan: (f64, f64),
    entry_next: Vec<IPoint>,
    entry_back: Vec<IPoint>,
}

impl Snapshot {
    pub fn capture(canvas: &LevelCanvas, viewport: &Viewport) -> Self {
        Self {
            strokes: canvas.strokes.clone(),
            doors: canvas.doors.clone(),
            selection: canvas.selection,
            brush_width: canvas.brush_width,
            preview_alpha: canvas.preview_alpha,
            grid_on: canvas.grid_on,
            grid_size: canvas.grid_size,
            simplify_on: canvas.simplify_on,
            sym_x: canvas.sym_x,
            sym_y: canvas.sym_y,
            spawn: canvas.spawn,
            zoom: viewport.zoom(),
            pan: viewport.pan(),
            entry_next: canvas.entry_next.clone(),
            entry_back: canvas.entry_back.clone(),
        }
    }

    /// Writes the snapshot back, regenerating the mask and dropping scaled caches.
    pub fn restore(self, canvas: &mut LevelCanvas, viewport: &mut Viewport) {
        canvas.strokes = self.strokes;
        canvas.doors = self.doors;
        canvas.selection = self.selection;
        canvas.brush_width = self.brush_width;
        canvas.preview_alpha = self.preview_alpha;
        canvas.grid_on = self.grid_on;
        canvas.grid_size = self.grid_size;
        canvas.simplify_on = self.simplify_on;
        canvas.sym_x = self.sym_x;
        canvas.sym_y = self.sym_y;
        canvas.spawn = self.spawn;
        canvas.entry_next = self.entry_next;
        canvas.entry_back = self.entry_back;
        viewport.set_state(self.zoom, self.pan.0, self.pan.1);
        canvas.invalidate_render_cache();
        canvas.update_mask();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

/// Bounded undo stack with a redo stack that any new push clears.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records the pre-mutation state. Drops the oldest entry past capacity.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Pops the most recent undo entry, parking `current` on the redo stack.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Pops the most recent redo entry, parking `current` on the undo stack.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(UNDO_DEPTH)
    }
}

/// Mutable access to the active canvas together with the shared view and history.
///
/// Commands that must be undoable go through here so the snapshot is taken
/// before the canvas changes.
pub struct EditContext<'a> {
    pub canvas: &'a mut LevelCanvas,
    pub viewport: &'a mut Viewport,
    pub history: &'a mut History,
}

impl<'a> EditContext<'a> {
    pub fn new(
        canvas: &'a mut LevelCanvas,
        viewport: &'a mut Viewport,
        history: &'a mut History,
    ) -> Self {
        Self {
            canvas,
            viewport,
            history,
        }
    }

    /// Snapshots the current state onto the undo stack and marks the canvas modified.
    pub fn push_undo(&mut self) {
        self.history
            .push(Snapshot::capture(self.canvas, self.viewport));
        self.canvas.mark_modified();
    }

    pub fn undo(&mut self) -> bool {
        let current = Snapshot::capture(self.canvas, self.viewport);
        let Some(snapshot) = self.history.undo(current) else {
            return false;
        };
        snapshot.restore(self.canvas, self.viewport);
        self.canvas.mark_modified();
        tracing::debug!("Undo ({} left)", self.history.undo_depth());
        true
    }

    pub fn redo(&mut self) -> bool {
        let current = Snapshot::capture(self.canvas, self.viewport);
        let Some(snapshot) = self.history.redo(current) else {
            return false;
        };
        snapshot.restore(self.canvas, self.viewport);
        self.canvas.mark_modified();
        tracing::debug!("Redo ({} left)", self.history.redo_depth());
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        if self.canvas.selection().is_none() {
            return false;
        }
        self.push_undo();
        self.canvas.delete_selected()
    }

    pub fn duplicate_selected(&mut self) -> bool {
        if self.canvas.selection().is_none() {
            return false;
        }
        self.push_undo();
        self.canvas.duplicate_selected()
    }

    pub fn clear_all(&mut self) {
        self.push_undo();
        self.canvas.clear_all();
    }
}
