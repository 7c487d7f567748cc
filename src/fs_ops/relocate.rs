//! Rename/move primitive.
//! - Refuses to overwrite: an existing destination is an error, never replaced.
//! - Performs a single `fs::rename`; there is no copy fallback, so a
//!   cross-device move fails with the host's error.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::RenameError;

use super::helpers::io_error_with_help;

/// Move `src` to `dst` (both full file paths).
pub fn relocate(src: &Path, dst: &Path) -> Result<()> {
    // symlink_metadata so a dangling symlink at the destination still counts as taken
    if fs::symlink_metadata(dst).is_ok() {
        return Err(RenameError::DestinationExists(dst.to_path_buf()).into());
    }

    fs::rename(src, dst).map_err(io_error_with_help("rename", src, dst))?;
    debug!(src = %src.display(), dest = %dst.display(), "relocated");
    Ok(())
}
