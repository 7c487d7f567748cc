//! Config validation logic.
//! Verifies the top directory and the optional destination before any traversal starts.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::RenameError;

use super::types::RunConfig;

impl RunConfig {
    /// Build a validated configuration.
    ///
    /// - `top_dir` must exist and be a directory.
    /// - `dest_dir`, when given, must exist and be a directory. It is never
    ///   created here so that a dry run leaves the filesystem untouched.
    pub fn new(
        top_dir: impl Into<PathBuf>,
        recursive: bool,
        skip_prompt: bool,
        dry_run: bool,
        dest_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let top_dir = top_dir.into();
        ensure_dir(&top_dir, "topdir", RenameError::TopDirNotFound)?;
        if let Some(dest) = dest_dir.as_deref() {
            ensure_dir(dest, "newdir", RenameError::DestDirNotFound)?;
        }

        let cfg = Self {
            top_dir,
            recursive,
            skip_prompt,
            dry_run,
            dest_dir,
        };
        info!(
            top_dir = %cfg.top_dir.display(),
            recursive,
            skip_prompt,
            dry_run,
            dest_dir = ?cfg.dest_dir,
            "Run config validated"
        );
        Ok(cfg)
    }
}

/// Ensure `path` exists and is a directory (symlinks to directories are accepted).
/// `not_found` builds the error reported when nothing exists at `path`.
fn ensure_dir(
    path: &Path,
    label: &'static str,
    not_found: fn(PathBuf) -> RenameError,
) -> Result<()> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(not_found(path.to_path_buf()).into());
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Cannot inspect {label} '{}'", path.display())));
        }
    };
    if !meta.is_dir() {
        return Err(RenameError::NotADirectory {
            label,
            path: path.to_path_buf(),
        }
        .into());
    }
    debug!(label, path = %path.display(), "directory ok");
    Ok(())
}
