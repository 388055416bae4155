//! Configuration errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// A value failed `EditorConfig::validate`. `key` is the dotted TOML path.
    #[error("Invalid value for {key}: {reason}")]
    OutOfRange { key: &'static str, reason: String },

    /// Only `.toml` and `.json` config files are understood.
    #[error("Config file {} must end in .toml or .json", .0.display())]
    UnknownExtension(PathBuf),

    #[error("No platform config directory")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML config: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("Could not write TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

impl SettingsError {
    pub(crate) fn out_of_range(key: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            key,
            reason: reason.into(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
