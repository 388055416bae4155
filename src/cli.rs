//! Headless command line over the editor core.

use crate::dialogs::NativeDialogs;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghosty_editor::bake;
use ghosty_editor::dialogs::{FileDialogs, NoDialogs};
use ghosty_editor::document::Document;
use ghosty_editor::{load_project, Direction};
use ghosty_settings::{default_config_path, EditorConfig};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ghosty", version, about = "Level-mask editor tools")]
pub struct Cli {
    /// Configuration file (TOML or JSON). Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bake a project into its colour-coded PNG mask
    Bake {
        project: PathBuf,
        /// Output PNG (defaults to `<project stem>_mask.png` next to the project)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print world size and item counts of a project
    Info { project: PathBuf },
    /// Create a project whose world adopts the size of a background image
    New {
        /// Background image; a file picker opens when omitted
        image: Option<PathBuf>,
        /// Project to write; a save dialog opens when omitted
        project: Option<PathBuf>,
    },
}

/// Counts reported by `ghosty info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub width: u32,
    pub height: u32,
    pub strokes: usize,
    pub doors: usize,
    pub has_spawn: bool,
    pub entries_next: usize,
    pub entries_back: usize,
    pub has_background: bool,
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} | {} strokes | {} doors | spawn: {} | entries: {} next, {} back | background: {}",
            self.width,
            self.height,
            self.strokes,
            self.doors,
            if self.has_spawn { "yes" } else { "no" },
            self.entries_next,
            self.entries_back,
            if self.has_background { "yes" } else { "no" },
        )
    }
}

/// Loads the configuration named on the command line, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path().context("Failed to resolve config directory")?,
    };
    EditorConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Bake { project, output } => {
            bake_project(&project, output.as_deref())?;
        }
        Commands::Info { project } => {
            let summary = project_info(&project)?;
            tracing::info!("{}: {}", project.display(), summary);
        }
        Commands::New { image, project } => {
            let config = load_config(cli.config.as_deref())?;
            let mut dialogs = NativeDialogs;
            let Some(image) = image.or_else(|| dialogs.pick_open_image()) else {
                tracing::info!("No image chosen");
                return Ok(());
            };
            let Some(project) = project.or_else(|| dialogs.pick_save_project()) else {
                tracing::info!("No project path chosen");
                return Ok(());
            };
            new_project(&image, &project, &config)?;
        }
    }
    Ok(())
}

/// Default mask path: `<stem>_mask.png` beside the project.
pub fn default_mask_path(project: &Path) -> PathBuf {
    let stem = project
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "level".to_string());
    project.with_file_name(format!("{}_mask.png", stem))
}

/// Loads `project` without prompting and writes its baked mask.
pub fn bake_project(project: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let canvas = load_project(project, &mut NoDialogs)
        .with_context(|| format!("Failed to load project {}", project.display()))?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_mask_path(project));
    bake::export_mask_png(&canvas, &output)
        .with_context(|| format!("Failed to write mask {}", output.display()))?;
    Ok(output)
}

pub fn project_info(project: &Path) -> Result<ProjectSummary> {
    let canvas = load_project(project, &mut NoDialogs)
        .with_context(|| format!("Failed to load project {}", project.display()))?;
    Ok(ProjectSummary {
        width: canvas.width(),
        height: canvas.height(),
        strokes: canvas.strokes().len(),
        doors: canvas.doors().len(),
        has_spawn: canvas.spawn().is_some(),
        entries_next: canvas.entries(Direction::Next).len(),
        entries_back: canvas.entries(Direction::Back).len(),
        has_background: canvas.background().is_some(),
    })
}

/// Creates a project from a background image, applying the configured
/// document defaults, and saves it.
pub fn new_project(image: &Path, project: &Path, config: &EditorConfig) -> Result<PathBuf> {
    let mut document = Document::from_image(image)
        .with_context(|| format!("Failed to import {}", image.display()))?;
    let canvas = document.canvas_mut();
    canvas.set_brush_width(config.document.brush_width);
    canvas.set_preview_alpha(config.document.preview_alpha);
    canvas.set_grid_size(config.document.grid_size);
    document
        .save_to(project)
        .with_context(|| format!("Failed to save {}", project.display()))?;
    let saved = document
        .project_path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project.to_path_buf());
    Ok(saved)
}
