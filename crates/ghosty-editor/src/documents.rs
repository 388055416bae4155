//! Open documents (tabs) and the state they share.
//!
//! The manager owns every open [`Document`] and which one is active. The view,
//! the undo/redo pair and the tool controller are shared: on a tab switch the
//! outgoing document's history is parked on it, the incoming one's restored,
//! tool buffers are dropped and the view refits the new world.

use crate::canvas::LevelCanvas;
use crate::dialogs::{Confirm, FileDialogs, SaveChoice};
use crate::document::Document;
use crate::history::{EditContext, History};
use crate::tools::{Modifiers, PointerButton, Tool, ToolController};
use crate::viewport::{Viewport, ZOOM_STEP};
use ghosty_core::{ProjectError, Result};
use ghosty_settings::EditorConfig;
use std::path::Path;

pub struct DocumentManager {
    documents: Vec<Document>,
    active: Option<usize>,
    viewport: Viewport,
    history: History,
    tools: ToolController,
    config: EditorConfig,
}

impl Default for DocumentManager {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl DocumentManager {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            documents: Vec::new(),
            active: None,
            viewport: Viewport::from_settings(&config.view),
            history: History::new(config.history.undo_depth),
            tools: ToolController::with_settings(&config.input),
            config,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.documents.get(self.active?)
    }

    pub fn active_document_mut(&mut self) -> Option<&mut Document> {
        self.documents.get_mut(self.active?)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Edit access to the active document with the shared view and history.
    pub fn context(&mut self) -> Option<EditContext<'_>> {
        let doc = self.documents.get_mut(self.active?)?;
        Some(EditContext::new(
            &mut doc.canvas,
            &mut self.viewport,
            &mut self.history,
        ))
    }

    fn with_tools<R>(
        &mut self,
        f: impl FnOnce(&mut ToolController, &mut EditContext<'_>) -> R,
    ) -> Option<R> {
        let doc = self.documents.get_mut(self.active?)?;
        let mut ctx = EditContext::new(&mut doc.canvas, &mut self.viewport, &mut self.history);
        Some(f(&mut self.tools, &mut ctx))
    }

    /// Appends a document and makes it active.
    pub fn add_document(&mut self, document: Document) -> Result<usize> {
        let mut document = document;
        document.parked_history = History::new(self.config.history.undo_depth);
        self.documents.push(document);
        let index = self.documents.len() - 1;
        self.switch_to(index)?;
        Ok(index)
    }

    /// Opens an empty tab sized by the configured document defaults.
    pub fn new_blank(&mut self, name: &str) -> Result<usize> {
        let canvas = LevelCanvas::with_settings(&self.config.document)?;
        self.add_document(Document::new(canvas, name))
    }

    /// Opens a new tab whose world adopts the image size.
    pub fn new_from_image(&mut self, path: &Path) -> Result<usize> {
        let document = Document::from_image(path)?;
        self.add_document(document)
    }

    pub fn open_image_dialog(&mut self, dialogs: &mut dyn FileDialogs) -> Result<Option<usize>> {
        match dialogs.pick_open_image() {
            Some(path) => self.new_from_image(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Opens a project in a new tab.
    pub fn open_project(&mut self, path: &Path, dialogs: &mut dyn FileDialogs) -> Result<usize> {
        let document = Document::open(path, dialogs)?;
        self.add_document(document)
    }

    pub fn open_project_dialog(&mut self, dialogs: &mut dyn FileDialogs) -> Result<Option<usize>> {
        match dialogs.pick_open_project() {
            Some(path) => self.open_project(&path, dialogs).map(Some),
            None => Ok(None),
        }
    }

    /// Activates tab `index`, swapping the shared history and refitting the view.
    pub fn switch_to(&mut self, index: usize) -> Result<()> {
        if index >= self.documents.len() {
            return Err(ProjectError::NoDocument.into());
        }
        if self.active == Some(index) {
            return Ok(());
        }
        let depth = self.config.history.undo_depth;
        let outgoing = std::mem::replace(&mut self.history, History::new(depth));
        if let Some(doc) = self.active.and_then(|i| self.documents.get_mut(i)) {
            doc.parked_history = outgoing;
        }

        let doc = &mut self.documents[index];
        self.history = std::mem::replace(&mut doc.parked_history, History::new(depth));
        doc.canvas.invalidate_render_cache();
        let (w, h) = doc.canvas.world_size();
        self.viewport.fit_and_center(w, h);
        self.tools.reset_buffers();
        self.active = Some(index);
        tracing::debug!("Switched to tab {} ({})", index, doc.name());
        Ok(())
    }

    /// Closes tab `index`, asking to save first when it has unsaved changes.
    ///
    /// Returns `false` when the user cancelled the question or the save.
    pub fn close(
        &mut self,
        index: usize,
        files: &mut dyn FileDialogs,
        confirm: &mut dyn Confirm,
    ) -> Result<bool> {
        let Some(doc) = self.documents.get(index) else {
            return Err(ProjectError::NoDocument.into());
        };
        if doc.is_modified() {
            match confirm.ask_save_changes(doc.name()) {
                SaveChoice::Cancel => return Ok(false),
                SaveChoice::Yes => {
                    if !self.save_document(index, files, false)? {
                        return Ok(false);
                    }
                }
                SaveChoice::No => {}
            }
        }

        let closed = self.documents.remove(index);
        tracing::debug!("Closed tab {} ({})", index, closed.name());
        match self.active {
            _ if self.documents.is_empty() => {
                self.active = None;
                self.history.clear();
                self.viewport.reset();
                self.tools.reset_buffers();
            }
            Some(active) if active == index => {
                self.active = None;
                self.history.clear();
                self.switch_to(index.min(self.documents.len() - 1))?;
            }
            Some(active) if active > index => self.active = Some(active - 1),
            _ => {}
        }
        Ok(true)
    }

    /// Saves tab `index`. Prompts for a path when there is none or `save_as`
    /// is set. Returns `false` when the prompt was dismissed.
    pub fn save_document(
        &mut self,
        index: usize,
        files: &mut dyn FileDialogs,
        save_as: bool,
    ) -> Result<bool> {
        let Some(doc) = self.documents.get_mut(index) else {
            return Err(ProjectError::NoDocument.into());
        };
        let path = match doc.project_path() {
            Some(p) if !save_as => p.to_path_buf(),
            _ => match files.pick_save_project() {
                Some(p) => p,
                None => return Ok(false),
            },
        };
        doc.save_to(&path)?;
        Ok(true)
    }

    pub fn save_active(&mut self, files: &mut dyn FileDialogs, save_as: bool) -> Result<bool> {
        let index = self.active.ok_or(ProjectError::NoDocument)?;
        self.save_document(index, files, save_as)
    }

    /// Bakes the active document and writes it where the user picks.
    pub fn export_active_mask(&mut self, files: &mut dyn FileDialogs) -> Result<bool> {
        let doc = self.active_document().ok_or(ProjectError::NoDocument)?;
        let Some(path) = files.pick_save_mask(doc.project_dir()) else {
            return Ok(false);
        };
        doc.export_mask(&path)?;
        Ok(true)
    }

    pub fn undo(&mut self) -> bool {
        self.context().is_some_and(|mut ctx| ctx.undo())
    }

    pub fn redo(&mut self) -> bool {
        self.context().is_some_and(|mut ctx| ctx.redo())
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.set_tool(tool);
    }

    pub fn enter_edit_mode(&mut self) {
        self.tools.enter_edit_mode();
    }

    pub fn enter_create_mode(&mut self) {
        self.tools.enter_create_mode();
    }

    pub fn set_space_held(&mut self, held: bool) {
        self.tools.set_space_held(held);
    }

    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        screen: (f64, f64),
        modifiers: Modifiers,
        now_ms: u64,
    ) {
        self.with_tools(|tools, ctx| tools.pointer_down(ctx, button, screen, modifiers, now_ms));
    }

    pub fn pointer_move(&mut self, screen: (f64, f64)) {
        self.with_tools(|tools, ctx| tools.pointer_move(ctx, screen));
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        self.tools.pointer_up(button);
    }

    /// Enter: commits the shape being drawn.
    pub fn commit(&mut self) -> bool {
        self.with_tools(|tools, ctx| tools.commit(ctx))
            .unwrap_or(false)
    }

    /// Escape: drops buffered door points.
    pub fn cancel_door(&mut self) {
        self.tools.cancel_door();
    }

    /// One wheel notch per unit of `notches`, anchored at the cursor.
    pub fn zoom_wheel(&mut self, notches: i32, cursor: (f64, f64)) {
        if self.active.is_none() || notches == 0 {
            return;
        }
        self.viewport.zoom_by(ZOOM_STEP.powi(notches), Some(cursor));
    }

    pub fn zoom_preset(&mut self, index: usize, cursor: Option<(f64, f64)>) {
        if self.active.is_some() {
            self.viewport.zoom_preset(index, cursor);
        }
    }

    pub fn fit_to_view(&mut self) {
        if let Some(doc) = self.active.and_then(|i| self.documents.get(i)) {
            let (w, h) = doc.canvas().world_size();
            self.viewport.fit_to_view(w, h);
        }
    }
}
