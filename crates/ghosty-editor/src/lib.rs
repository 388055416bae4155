//! # Ghosty Editor
//!
//! The editing core of the Ghosty level-mask editor. A level is painted over
//! a background image as wall strokes, door polygons and spawn/entry markers,
//! and baked into a colour-coded PNG mask.
//!
//! ## Core Components
//!
//! - **Geometry**: orthogonalisation, bounds, hit-testing, symmetry mirroring
//! - **Canvas**: per-document world state and the derived wall mask
//! - **Viewport**: world/screen mapping, zoom and pan
//! - **Tools**: the interaction state machine for both edit and create modes
//! - **History**: snapshot undo/redo
//! - **Serialization / Bake**: project files and mask export
//! - **Documents**: open tabs sharing one view and one undo stack
//!
//! ## Architecture
//!
//! ```text
//! DocumentManager
//!   ├── Document (one per tab)
//!   │     └── LevelCanvas (items, markers, wall mask, background)
//!   ├── Viewport (shared)
//!   ├── History (shared, parked per document on tab switch)
//!   └── ToolController (shared)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ghosty_editor::{bake, DocumentManager, NoDialogs};
//!
//! let mut docs = DocumentManager::default();
//! docs.open_project(Path::new("cave.xzenp"), &mut NoDialogs)?;
//! let mask = bake::bake_mask(docs.active_document().unwrap().canvas());
//! ```

pub mod background;
pub mod bake;
pub mod canvas;
pub mod dialogs;
pub mod document;
pub mod documents;
pub mod geometry;
pub mod history;
pub mod model;
pub mod raster;
pub mod render_cache;
pub mod serialization;
pub mod tools;
pub mod viewport;

pub use background::{Background, BackgroundSource};
pub use canvas::LevelCanvas;
pub use dialogs::{Confirm, FileDialogs, NoDialogs, SaveChoice};
pub use document::Document;
pub use documents::DocumentManager;
pub use history::{EditContext, History, Snapshot};
pub use model::{Direction, Door, DrawMode, ItemKind, Selection, Stroke};
pub use serialization::{load_project, save_project, ProjectFile};
pub use tools::{CreateTool, EditTool, Modifiers, PointerButton, Tool, ToolController};
pub use viewport::{ViewRect, Viewport};
