//! Project file save and load.
//!
//! Projects are pretty-printed JSON documents (`.xzenp`). Field names are kept
//! compatible with existing files and every field is optional on load: legacy
//! records without a width inherit the project's `brush_w`, doors without a
//! kind become "next".
//!
//! The background is recorded three ways (absolute path, path relative to the
//! project, base64 copy of the file) and resolved on load in that order, with
//! a same-directory lookup by file name and a final interactive prompt.

use crate::background::{self, BackgroundSource};
use crate::canvas::LevelCanvas;
use crate::dialogs::FileDialogs;
use crate::model::{Direction, Door, DrawMode, Stroke};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use ghosty_core::constants::{
    DEFAULT_WORLD_H, DEFAULT_WORLD_W, GRID_SIZE_DEFAULT, LINE_WIDTH_DEFAULT,
    PREVIEW_ALPHA_DEFAULT, PREVIEW_ALPHA_MAX, PREVIEW_ALPHA_MIN, WIDTH_MAX, WIDTH_MIN,
};
use ghosty_core::{IPoint, ProjectError, Result};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

fn default_true() -> bool {
    true
}

fn default_world_size() -> (i64, i64) {
    (DEFAULT_WORLD_W as i64, DEFAULT_WORLD_H as i64)
}

fn default_brush_w() -> i32 {
    LINE_WIDTH_DEFAULT
}

fn default_preview_alpha() -> i32 {
    PREVIEW_ALPHA_DEFAULT
}

fn default_grid_size() -> i32 {
    GRID_SIZE_DEFAULT
}

/// Serialized stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeRecord {
    #[serde(default)]
    pub mode: DrawMode,
    #[serde(default)]
    pub pts: Vec<IPoint>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub name: String,
    /// Missing in legacy files.
    #[serde(default)]
    pub w: Option<i32>,
}

/// Serialized door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorRecord {
    #[serde(default)]
    pub pts: Vec<IPoint>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: Direction,
    #[serde(default)]
    pub w: Option<i32>,
}

/// Complete project file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub bg_path: Option<String>,
    #[serde(default)]
    pub bg_rel: Option<String>,
    #[serde(default)]
    pub bg_embed_b64: Option<String>,
    #[serde(default = "default_world_size")]
    pub world_size: (i64, i64),
    #[serde(default)]
    pub strokes: Vec<StrokeRecord>,
    #[serde(default)]
    pub doors: Vec<DoorRecord>,
    #[serde(default = "default_brush_w")]
    pub brush_w: i32,
    #[serde(default = "default_preview_alpha")]
    pub preview_alpha: i32,
    #[serde(default)]
    pub grid_on: bool,
    #[serde(default = "default_grid_size")]
    pub grid_size: i32,
    #[serde(default)]
    pub simplify_on: bool,
    #[serde(default)]
    pub sym_x: bool,
    #[serde(default)]
    pub sym_y: bool,
    #[serde(default)]
    pub spawn_pos: Option<IPoint>,
    #[serde(default)]
    pub entry_next_spawns: Vec<IPoint>,
    #[serde(default)]
    pub entry_back_spawns: Vec<IPoint>,
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self {
            bg_path: None,
            bg_rel: None,
            bg_embed_b64: None,
            world_size: default_world_size(),
            strokes: Vec::new(),
            doors: Vec::new(),
            brush_w: LINE_WIDTH_DEFAULT,
            preview_alpha: PREVIEW_ALPHA_DEFAULT,
            grid_on: false,
            grid_size: GRID_SIZE_DEFAULT,
            simplify_on: false,
            sym_x: false,
            sym_y: false,
            spawn_pos: None,
            entry_next_spawns: Vec::new(),
            entry_back_spawns: Vec::new(),
        }
    }
}

/// A place the background may be found, tried in order.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundCandidate {
    File(PathBuf),
    Embedded(String),
}

/// Path of `target` relative to the directory `base`.
///
/// Returns `None` when the two share no common root (different drives).
pub fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
    let target = std::path::absolute(target).ok()?;
    let base = std::path::absolute(base).ok()?;
    let t: Vec<Component> = target.components().collect();
    let b: Vec<Component> = base.components().collect();
    if t.first() != b.first() {
        return None;
    }
    let common = t.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let mut rel = PathBuf::new();
    for _ in common..b.len() {
        rel.push("..");
    }
    for c in &t[common..] {
        rel.push(c.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}

fn project_dir(project_path: &Path) -> PathBuf {
    match project_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

impl ProjectFile {
    /// Captures a canvas for saving to `project_path`.
    pub fn from_canvas(canvas: &LevelCanvas, project_path: &Path) -> Self {
        let mut file = Self {
            world_size: (canvas.width() as i64, canvas.height() as i64),
            strokes: canvas
                .strokes()
                .iter()
                .map(|s| StrokeRecord {
                    mode: s.mode,
                    pts: s.points.clone(),
                    visible: s.visible,
                    locked: s.locked,
                    name: s.name.clone(),
                    w: Some(s.width),
                })
                .collect(),
            doors: canvas
                .doors()
                .iter()
                .map(|d| DoorRecord {
                    pts: d.points.clone(),
                    visible: d.visible,
                    locked: d.locked,
                    name: d.name.clone(),
                    kind: d.kind,
                    w: Some(d.width),
                })
                .collect(),
            brush_w: canvas.brush_width(),
            preview_alpha: canvas.preview_alpha(),
            grid_on: canvas.grid_on(),
            grid_size: canvas.grid_size(),
            simplify_on: canvas.simplify_on(),
            sym_x: canvas.symmetry().0,
            sym_y: canvas.symmetry().1,
            spawn_pos: canvas.spawn(),
            entry_next_spawns: canvas.entries(Direction::Next).to_vec(),
            entry_back_spawns: canvas.entries(Direction::Back).to_vec(),
            ..Self::default()
        };

        if let Some(bg) = canvas.background() {
            file.set_background_refs(&bg.source, project_path);
        }
        file
    }

    fn set_background_refs(&mut self, source: &BackgroundSource, project_path: &Path) {
        let existing = source.path.as_deref().filter(|p| p.is_file());
        if let Some(path) = existing {
            let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            self.bg_path = Some(abs.display().to_string());
            self.bg_rel = relative_path(&abs, &project_dir(project_path))
                .map(|p| p.display().to_string());
        }

        let bytes = match existing.map(std::fs::read) {
            Some(Ok(bytes)) => Some(bytes),
            Some(Err(e)) => {
                tracing::warn!("Could not read background for embedding: {}", e);
                source.embedded.clone()
            }
            None => source.embedded.clone(),
        };
        self.bg_embed_b64 = bytes.map(|b| STANDARD.encode(b));
    }

    /// Background locations in resolution order.
    pub fn background_candidates(&self, project_path: &Path) -> Vec<BackgroundCandidate> {
        let dir = project_dir(project_path);
        let mut out = Vec::new();
        if let Some(abs) = &self.bg_path {
            out.push(BackgroundCandidate::File(PathBuf::from(abs)));
        }
        if let Some(rel) = &self.bg_rel {
            out.push(BackgroundCandidate::File(dir.join(rel)));
        }
        if let Some(name) = self.bg_path.as_deref().and_then(|p| Path::new(p).file_name()) {
            out.push(BackgroundCandidate::File(dir.join(name)));
        }
        if let Some(b64) = &self.bg_embed_b64 {
            out.push(BackgroundCandidate::Embedded(b64.clone()));
        }
        out
    }

    /// Save project to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load project from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file = serde_json::from_str(&content)?;
        Ok(file)
    }

    /// Builds a clean canvas from this project.
    ///
    /// `dialogs` is asked to locate the background only when every stored
    /// reference fails; with no answer the project loads without one.
    pub fn into_canvas(
        self,
        project_path: &Path,
        dialogs: &mut dyn FileDialogs,
    ) -> Result<LevelCanvas> {
        let (w, h) = self.world_size;
        if w <= 0 || h <= 0 || w > i32::MAX as i64 || h > i32::MAX as i64 {
            return Err(ProjectError::InvalidWorldSize {
                width: w,
                height: h,
            }
            .into());
        }
        let mut canvas = LevelCanvas::new(w as u32, h as u32)?;

        // Legacy records inherit the stored value; only the brush is clamped.
        let legacy_w = self.brush_w;
        canvas.brush_width = legacy_w.clamp(WIDTH_MIN, WIDTH_MAX);
        canvas.preview_alpha = self.preview_alpha.clamp(PREVIEW_ALPHA_MIN, PREVIEW_ALPHA_MAX);
        canvas.grid_on = self.grid_on;
        canvas.grid_size = self.grid_size;
        canvas.simplify_on = self.simplify_on;
        canvas.sym_x = self.sym_x;
        canvas.sym_y = self.sym_y;
        canvas.spawn = self.spawn_pos;

        if let Some((image, source)) = self.resolve_background(project_path, dialogs) {
            canvas.set_background(image, source, true)?;
        }

        canvas.strokes = self
            .strokes
            .into_iter()
            .map(|r| {
                let mut s = Stroke::new(r.mode, r.pts, r.w.unwrap_or(legacy_w), r.name);
                s.visible = r.visible;
                s.locked = r.locked;
                s
            })
            .collect();
        canvas.doors = self
            .doors
            .into_iter()
            .map(|r| {
                let mut d = Door::new(r.kind, r.pts, r.w.unwrap_or(legacy_w), r.name);
                d.visible = r.visible;
                d.locked = r.locked;
                d
            })
            .collect();
        canvas.entry_next = self.entry_next_spawns;
        canvas.entry_back = self.entry_back_spawns;
        canvas.selection = None;

        canvas.update_mask();
        canvas.mark_clean();
        Ok(canvas)
    }

    fn resolve_background(
        &self,
        project_path: &Path,
        dialogs: &mut dyn FileDialogs,
    ) -> Option<(RgbImage, BackgroundSource)> {
        if self.bg_path.is_none() && self.bg_rel.is_none() && self.bg_embed_b64.is_none() {
            return None;
        }
        for candidate in self.background_candidates(project_path) {
            match try_candidate(&candidate) {
                Ok(Some(found)) => return Some(found),
                Ok(None) => {}
                Err(e) => tracing::warn!("Background candidate {:?} unusable: {}", candidate, e),
            }
        }

        let located = dialogs.locate_background()?;
        match background::load_image_file(&located) {
            Ok((image, _)) => Some((
                image,
                BackgroundSource {
                    path: Some(located),
                    embedded: None,
                },
            )),
            Err(e) => {
                tracing::warn!("Background not found; loading without one: {}", e);
                None
            }
        }
    }
}

fn try_candidate(candidate: &BackgroundCandidate) -> Result<Option<(RgbImage, BackgroundSource)>> {
    match candidate {
        BackgroundCandidate::File(path) => {
            if !path.is_file() {
                return Ok(None);
            }
            let (image, _) = background::load_image_file(path)?;
            Ok(Some((
                image,
                BackgroundSource {
                    path: Some(path.clone()),
                    embedded: None,
                },
            )))
        }
        BackgroundCandidate::Embedded(b64) => {
            let bytes = STANDARD
                .decode(b64.trim())
                .map_err(|e| ProjectError::BadEmbeddedBackground {
                    reason: e.to_string(),
                })?;
            let image = background::decode_image(&bytes, "embedded")?;
            Ok(Some((
                image,
                BackgroundSource {
                    path: None,
                    embedded: Some(bytes),
                },
            )))
        }
    }
}

/// Writes `canvas` to `path` as a project file.
pub fn save_project(canvas: &LevelCanvas, path: &Path) -> Result<()> {
    ProjectFile::from_canvas(canvas, path).save_to_file(path)?;
    tracing::info!("Saved project {}", path.display());
    Ok(())
}

/// Reads a project file into a clean canvas.
pub fn load_project(path: &Path, dialogs: &mut dyn FileDialogs) -> Result<LevelCanvas> {
    let canvas = ProjectFile::load_from_file(path)?.into_canvas(path, dialogs)?;
    tracing::info!(
        "Loaded project {} ({}x{}, {} strokes, {} doors)",
        path.display(),
        canvas.width(),
        canvas.height(),
        canvas.strokes().len(),
        canvas.doors().len()
    );
    Ok(canvas)
}
