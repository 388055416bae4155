//! # Ghosty Core
//!
//! Core types, errors and constants shared by the Ghosty level-mask editor crates.
//! Provides the integer world-space primitives, the error taxonomy used by the
//! persistence and bake pipeline, and the fixed colour semantics of the exported mask.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, ImageError, ProjectError, Result};
pub use types::{IPoint, IRect};
