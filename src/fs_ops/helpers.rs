//! I/O error helpers.
//!
//! Turns a bare `io::Error` from a rename into a message naming the operation,
//! both paths, and a short hint for the common failure causes.
//!
//! Usage:
//!   fs::rename(src, dst).map_err(io_error_with_help("rename", src, dst))?;

use std::io;
use std::path::Path;

use crate::errors::RenameError;

/// Hint for well-known errno values, falling back to the error kind.
fn hint_for(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        let hint = match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("cross-device move; source and destination are on different filesystems"),
            libc::EEXIST | libc::ENOTEMPTY => Some("destination already exists"),
            libc::ENOENT => Some("path not found; was it removed during the run?"),
            libc::EROFS => Some("read-only filesystem"),
            libc::ENAMETOOLONG => Some("new filename too long; shorten the directory name"),
            libc::EBUSY => Some("resource busy"),
            _ => None,
        };
        if hint.is_some() {
            return hint;
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; was it removed during the run?"),
        io::ErrorKind::AlreadyExists => Some("destination already exists"),
        io::ErrorKind::CrossesDevices => Some("cross-device move; source and destination are on different filesystems"),
        _ => None,
    }
}

/// Human-friendly description: `<op> '<src>' -> '<dst>': <error> (<hint>) [os code: N]`.
pub fn describe_io_error(op: &str, src: &Path, dst: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}' -> '{}': {}", op, src.display(), dst.display(), e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(&format!(" ({hint})"));
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for `.map_err(...)`: wraps the io::Error into [`RenameError::Relocate`].
pub fn io_error_with_help<'a>(
    op: &'a str,
    src: &'a Path,
    dst: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| RenameError::Relocate(describe_io_error(op, src, dst, &e)).into()
}
