//! Typed error definitions for photo_rename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Top directory not found: {0}")]
    TopDirNotFound(PathBuf),

    #[error("Destination directory not found: {0}")]
    DestDirNotFound(PathBuf),

    #[error("{label} is not a directory: {path}")]
    NotADirectory { label: &'static str, path: PathBuf },

    #[error("Refusing to overwrite existing file: {0}")]
    DestinationExists(PathBuf),

    #[error("{0}")]
    Relocate(String),
}

impl RenameError {
    /// Stable numeric code used in structured logs.
    pub fn code(&self) -> u16 {
        match self {
            RenameError::TopDirNotFound(_) => 10,
            RenameError::NotADirectory { .. } => 11,
            RenameError::DestDirNotFound(_) => 12,
            RenameError::DestinationExists(_) => 20,
            RenameError::Relocate(_) => 21,
        }
    }

    /// Short machine-friendly name for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RenameError::TopDirNotFound(_) => "top_dir_not_found",
            RenameError::NotADirectory { .. } => "not_a_directory",
            RenameError::DestDirNotFound(_) => "dest_dir_not_found",
            RenameError::DestinationExists(_) => "destination_exists",
            RenameError::Relocate(_) => "relocate_failed",
        }
    }
}
