//! # Ghosty
//!
//! A level-mask editor core: walls, doors and spawn markers are painted over a
//! background image and baked into a colour-coded PNG mask.
//!
//! ## Architecture
//!
//! Ghosty is organized as a workspace with multiple crates:
//!
//! 1. **ghosty-core** - Integer geometry primitives, errors, mask colours and limits
//! 2. **ghosty-editor** - Canvas, viewport, tools, history, persistence, bake, tabs
//! 3. **ghosty-settings** - Editor configuration
//! 4. **ghosty** - This crate: logging, native dialogs and the command line

pub mod cli;
pub mod dialogs;

pub use ghosty_core::{Error, Result};
pub use ghosty_editor as editor;
pub use ghosty_settings::EditorConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
