//! Canvas mutations: commits, item edits, selection and parameter changes.
//!
//! Every mutation that changes what the mask shows regenerates it and marks
//! the canvas modified. Snapshotting for undo is the caller's job and happens
//! before the mutation.

use super::LevelCanvas;
use crate::model::{sanitize_name, Direction, Door, DrawMode, ItemKind, Selection, Stroke};
use ghosty_core::constants::{
    PREVIEW_ALPHA_MAX, PREVIEW_ALPHA_MIN, WIDTH_MAX, WIDTH_MIN,
};
use ghosty_core::{IPoint, ProjectError, Result};

impl LevelCanvas {
    fn check(&self, selection: Selection) -> Result<()> {
        if self.contains(selection) {
            Ok(())
        } else {
            Err(ProjectError::NoSuchItem {
                kind: selection.kind.to_string(),
                index: selection.index,
            }
            .into())
        }
    }

    /// Appends a stroke drawn with the current brush width.
    ///
    /// Returns the new index, or `None` when `points` is empty.
    pub fn commit_stroke(&mut self, mode: DrawMode, points: Vec<IPoint>) -> Option<usize> {
        if points.is_empty() {
            return None;
        }
        let name = format!("Stroke {:02}", self.strokes.len());
        self.strokes
            .push(Stroke::new(mode, points, self.brush_width, name));
        self.update_mask();
        self.mark_modified();
        tracing::debug!("Committed stroke {}", self.strokes.len() - 1);
        Some(self.strokes.len() - 1)
    }

    /// Appends a door polygon. Returns `None` for fewer than three points.
    pub fn commit_door(&mut self, kind: Direction, points: Vec<IPoint>) -> Option<usize> {
        if points.len() < Door::MIN_POINTS {
            return None;
        }
        let name = format!("Door {:02}", self.doors.len());
        self.doors
            .push(Door::new(kind, points, self.brush_width, name));
        self.mark_modified();
        tracing::debug!("Committed {} door {}", kind, self.doors.len() - 1);
        Some(self.doors.len() - 1)
    }

    /// Inserts an already-built stroke without touching its fields.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.update_mask();
        self.mark_modified();
    }

    /// Inserts an already-built door without touching its fields.
    pub fn push_door(&mut self, door: Door) {
        self.doors.push(door);
        self.mark_modified();
    }

    pub fn select(&mut self, selection: Option<Selection>) {
        self.selection = selection.filter(|s| self.contains(*s));
    }

    /// Walks the flat order "strokes then doors", wrapping at both ends.
    ///
    /// With nothing selected the first stroke (or first door) is chosen.
    pub fn select_step(&mut self, forward: bool) {
        let strokes = self.strokes.len();
        let total = strokes + self.doors.len();
        if total == 0 {
            return;
        }
        let next = match self.selection {
            None => 0,
            Some(sel) => {
                let flat = match sel.kind {
                    ItemKind::Stroke => sel.index,
                    ItemKind::Door => strokes + sel.index,
                };
                if forward {
                    (flat + 1) % total
                } else {
                    (flat + total - 1) % total
                }
            }
        };
        self.selection = Some(if next < strokes {
            Selection::stroke(next)
        } else {
            Selection::door(next - strokes)
        });
    }

    pub fn select_next(&mut self) {
        self.select_step(true);
    }

    pub fn select_previous(&mut self) {
        self.select_step(false);
    }

    pub fn toggle_visible(&mut self, selection: Selection) -> Result<()> {
        self.check(selection)?;
        match selection.kind {
            ItemKind::Stroke => {
                let stroke = &mut self.strokes[selection.index];
                stroke.visible = !stroke.visible;
                self.update_mask();
            }
            ItemKind::Door => {
                let door = &mut self.doors[selection.index];
                door.visible = !door.visible;
            }
        }
        self.mark_modified();
        Ok(())
    }

    pub fn toggle_locked(&mut self, selection: Selection) -> Result<()> {
        self.check(selection)?;
        match selection.kind {
            ItemKind::Stroke => {
                let stroke = &mut self.strokes[selection.index];
                stroke.locked = !stroke.locked;
            }
            ItemKind::Door => {
                let door = &mut self.doors[selection.index];
                door.locked = !door.locked;
            }
        }
        self.mark_modified();
        Ok(())
    }

    pub fn is_locked(&self, selection: Selection) -> bool {
        match selection.kind {
            ItemKind::Stroke => self.strokes.get(selection.index).is_some_and(|s| s.locked),
            ItemKind::Door => self.doors.get(selection.index).is_some_and(|d| d.locked),
        }
    }

    /// Renames an item after stripping decoration characters.
    pub fn rename(&mut self, selection: Selection, name: &str) -> Result<()> {
        self.check(selection)?;
        let name = sanitize_name(name);
        match selection.kind {
            ItemKind::Stroke => self.strokes[selection.index].name = name,
            ItemKind::Door => self.doors[selection.index].name = name,
        }
        self.mark_modified();
        Ok(())
    }

    /// Deletes the selected item and moves the selection to a neighbour.
    pub fn delete_selected(&mut self) -> bool {
        let Some(sel) = self.selection.filter(|s| self.contains(*s)) else {
            return false;
        };
        match sel.kind {
            ItemKind::Stroke => {
                self.strokes.remove(sel.index);
                self.update_mask();
                self.selection = if !self.strokes.is_empty() {
                    Some(Selection::stroke(sel.index.min(self.strokes.len() - 1)))
                } else if !self.doors.is_empty() {
                    Some(Selection::door(0))
                } else {
                    None
                };
            }
            ItemKind::Door => {
                self.doors.remove(sel.index);
                self.selection = if !self.doors.is_empty() {
                    Some(Selection::door(sel.index.min(self.doors.len() - 1)))
                } else if !self.strokes.is_empty() {
                    Some(Selection::stroke(0))
                } else {
                    None
                };
            }
        }
        self.mark_modified();
        true
    }

    /// Appends a copy of the selected item and selects the copy.
    pub fn duplicate_selected(&mut self) -> bool {
        let Some(sel) = self.selection.filter(|s| self.contains(*s)) else {
            return false;
        };
        match sel.kind {
            ItemKind::Stroke => {
                let copy = self.strokes[sel.index].clone();
                self.strokes.push(copy);
                self.selection = Some(Selection::stroke(self.strokes.len() - 1));
                self.update_mask();
            }
            ItemKind::Door => {
                let copy = self.doors[sel.index].clone();
                self.doors.push(copy);
                self.selection = Some(Selection::door(self.doors.len() - 1));
            }
        }
        self.mark_modified();
        true
    }

    /// Swaps the selected stroke with its neighbour `delta` places away.
    ///
    /// Doors are not reorderable. Returns `false` when nothing moved.
    pub fn reorder_selected(&mut self, delta: isize) -> bool {
        let Some(sel) = self.selection else {
            return false;
        };
        if sel.kind != ItemKind::Stroke || sel.index >= self.strokes.len() {
            return false;
        }
        let last = self.strokes.len() as isize - 1;
        let target = (sel.index as isize + delta).clamp(0, last) as usize;
        if target == sel.index {
            return false;
        }
        self.strokes.swap(sel.index, target);
        self.selection = Some(Selection::stroke(target));
        self.update_mask();
        self.mark_modified();
        true
    }

    /// Sets an item's points to `original` shifted by `(dx, dy)`, rounded.
    pub fn translate_item(
        &mut self,
        selection: Selection,
        original: &[IPoint],
        dx: f64,
        dy: f64,
    ) -> Result<()> {
        self.check(selection)?;
        let moved: Vec<IPoint> = original
            .iter()
            .map(|p| IPoint::round(p.x as f64 + dx, p.y as f64 + dy))
            .collect();
        match selection.kind {
            ItemKind::Stroke => {
                self.strokes[selection.index].points = moved;
                self.update_mask();
            }
            ItemKind::Door => self.doors[selection.index].points = moved,
        }
        self.mark_modified();
        Ok(())
    }

    /// Points of the addressed item, if it exists.
    pub fn item_points(&self, selection: Selection) -> Option<&[IPoint]> {
        match selection.kind {
            ItemKind::Stroke => self.strokes.get(selection.index).map(|s| s.points.as_slice()),
            ItemKind::Door => self.doors.get(selection.index).map(|d| d.points.as_slice()),
        }
    }

    /// Removes every stroke, door and marker.
    pub fn clear_all(&mut self) {
        self.strokes.clear();
        self.doors.clear();
        self.entry_next.clear();
        self.entry_back.clear();
        self.spawn = None;
        self.selection = None;
        self.update_mask();
        self.invalidate_render_cache();
        self.mark_modified();
    }

    pub fn set_spawn(&mut self, spawn: Option<IPoint>) {
        self.spawn = spawn;
        self.mark_modified();
    }

    pub fn add_entry(&mut self, direction: Direction, p: IPoint) {
        self.entries_mut(direction).push(p);
        self.mark_modified();
    }

    /// Index of the entry marker closest to `p`, if within `radius_sq`.
    pub fn nearest_entry(&self, direction: Direction, p: IPoint, radius_sq: i64) -> Option<usize> {
        self.entries(direction)
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| e.distance_sq(p))
            .filter(|(_, e)| e.distance_sq(p) <= radius_sq)
            .map(|(i, _)| i)
    }

    pub fn remove_entry(&mut self, direction: Direction, index: usize) -> Option<IPoint> {
        let entries = self.entries_mut(direction);
        if index >= entries.len() {
            return None;
        }
        let removed = entries.remove(index);
        self.mark_modified();
        Some(removed)
    }

    pub fn set_brush_width(&mut self, width: i32) {
        self.brush_width = width.clamp(WIDTH_MIN, WIDTH_MAX);
        self.mark_modified();
    }

    pub fn adjust_brush_width(&mut self, delta: i32) {
        self.set_brush_width(self.brush_width + delta);
    }

    pub fn set_preview_alpha(&mut self, alpha: i32) {
        self.preview_alpha = alpha.clamp(PREVIEW_ALPHA_MIN, PREVIEW_ALPHA_MAX);
        self.mark_modified();
    }

    pub fn adjust_preview_alpha(&mut self, delta: i32) {
        self.set_preview_alpha(self.preview_alpha + delta);
    }

    pub fn toggle_grid(&mut self) {
        self.grid_on = !self.grid_on;
        self.mark_modified();
    }

    pub fn set_grid_size(&mut self, size: i32) {
        self.grid_size = size.max(1);
        self.mark_modified();
    }

    pub fn toggle_simplify(&mut self) {
        self.simplify_on = !self.simplify_on;
        self.mark_modified();
    }

    pub fn toggle_sym_x(&mut self) {
        self.sym_x = !self.sym_x;
        self.mark_modified();
    }

    pub fn toggle_sym_y(&mut self) {
        self.sym_y = !self.sym_y;
        self.mark_modified();
    }
}
