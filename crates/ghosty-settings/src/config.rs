//! Configuration for the Ghosty editor
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Document defaults (world size, brush width, preview alpha, grid)
//! - Input timing and tolerances
//! - History depth
//! - View placement

use crate::error::{SettingsError, SettingsResult};
use ghosty_core::constants::{
    DEFAULT_WORLD_H, DEFAULT_WORLD_W, DOUBLE_CLICK_MS, GRID_SIZE_DEFAULT, LINE_WIDTH_DEFAULT,
    MARKER_REMOVE_RADIUS_SQ, PREVIEW_ALPHA_DEFAULT, PREVIEW_ALPHA_MAX, PREVIEW_ALPHA_MIN,
    UNDO_DEPTH, VIEW_FIT_MARGIN, WIDTH_MAX, WIDTH_MIN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "ghosty";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Defaults applied to new documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// World width for documents created without a background
    pub world_width: u32,
    /// World height for documents created without a background
    pub world_height: u32,
    /// Initial stroke width
    pub brush_width: i32,
    /// Initial overlay opacity of the mask preview
    pub preview_alpha: i32,
    /// Initial grid spacing
    pub grid_size: i32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_W,
            world_height: DEFAULT_WORLD_H,
            brush_width: LINE_WIDTH_DEFAULT,
            preview_alpha: PREVIEW_ALPHA_DEFAULT,
            grid_size: GRID_SIZE_DEFAULT,
        }
    }
}

/// Pointer input tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Two clicks within this window finalize the current shape
    pub double_click_ms: u64,
    /// Squared radius for removing an entry marker with a secondary click
    pub marker_remove_radius_sq: i64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            double_click_ms: DOUBLE_CLICK_MS,
            marker_remove_radius_sq: MARKER_REMOVE_RADIUS_SQ,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undo snapshots kept
    pub undo_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            undo_depth: UNDO_DEPTH,
        }
    }
}

/// Placement of the drawing area inside the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Margin subtracted from each axis when fitting the world into view
    pub fit_margin: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        // Left toolbar 72px; top bar 36px plus tab strip 28px.
        Self {
            x: 72.0,
            y: 64.0,
            width: 1024.0,
            height: 720.0,
            fit_margin: VIEW_FIT_MARGIN,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub document: DocumentSettings,
    pub input: InputSettings,
    pub history: HistorySettings,
    pub view: ViewSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(SettingsError::UnknownExtension(path.to_path_buf())),
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => return Err(SettingsError::UnknownExtension(path.to_path_buf())),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let doc = &self.document;
        if doc.world_width == 0 || doc.world_height == 0 {
            return Err(SettingsError::out_of_range(
                "document.world_size",
                "dimensions must be > 0",
            ));
        }
        if !(WIDTH_MIN..=WIDTH_MAX).contains(&doc.brush_width) {
            return Err(SettingsError::out_of_range(
                "document.brush_width",
                format!("must be in [{WIDTH_MIN}, {WIDTH_MAX}]"),
            ));
        }
        if !(PREVIEW_ALPHA_MIN..=PREVIEW_ALPHA_MAX).contains(&doc.preview_alpha) {
            return Err(SettingsError::out_of_range(
                "document.preview_alpha",
                format!("must be in [{PREVIEW_ALPHA_MIN}, {PREVIEW_ALPHA_MAX}]"),
            ));
        }
        if doc.grid_size <= 0 {
            return Err(SettingsError::out_of_range("document.grid_size", "must be > 0"));
        }
        if self.history.undo_depth == 0 {
            return Err(SettingsError::out_of_range("history.undo_depth", "must be > 0"));
        }
        if self.view.width <= 0.0 || self.view.height <= 0.0 {
            return Err(SettingsError::out_of_range(
                "view.size",
                "dimensions must be > 0",
            ));
        }
        if self.view.fit_margin < 0.0 {
            return Err(SettingsError::out_of_range("view.fit_margin", "must be >= 0"));
        }
        Ok(())
    }
}

/// Default location of the config file in the platform config directory
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(SettingsError::NoConfigDir)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
