//! Ghosty Settings Crate
//!
//! Handles editor configuration: defaults for new documents, input timing,
//! undo depth and the placement of the drawing area.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, DocumentSettings, EditorConfig, HistorySettings, InputSettings,
    ViewSettings,
};
pub use error::{SettingsError, SettingsResult};
