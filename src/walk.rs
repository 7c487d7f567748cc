//! Directory walker.
//!
//! Yields each directory under the root once, parent before children, with
//! the names of the files it directly contains. Both the directory order and
//! the file lists are sorted by name so repeated runs see the same order.
//! Symlinks to directories are never descended into.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

/// One visited directory and its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub dir: PathBuf,
    pub files: Vec<OsString>,
}

/// Walk `root` lazily.
///
/// - `recursive == false` visits only `root`.
/// - `exclude`, if it is a directory below `root`, is skipped together with its
///   subtree. The root itself is never excluded.
pub fn walk(root: &Path, recursive: bool, exclude: Option<&Path>) -> impl Iterator<Item = DirListing> {
    let exclude_real = exclude.map(|p| fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf()));

    let mut walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(0);
    }

    walker
        .into_iter()
        .filter_entry(move |e| e.file_type().is_dir() && !is_excluded(e, exclude_real.as_deref()))
        .filter_map(|res| match res {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory");
                None
            }
        })
        .filter_map(|entry| list_files(entry.path()).map(|files| DirListing {
            dir: entry.into_path(),
            files,
        }))
}

fn is_excluded(entry: &DirEntry, exclude: Option<&Path>) -> bool {
    let Some(exclude) = exclude else {
        return false;
    };
    if entry.depth() == 0 {
        return false;
    }
    let hit = fs::canonicalize(entry.path()).is_ok_and(|real| real == exclude);
    if hit {
        trace!(dir = %entry.path().display(), "not descending into destination directory");
    }
    hit
}

/// Sorted names of the non-directory entries of `dir`. A symlink counts as a
/// file unless it resolves to a directory.
fn list_files(dir: &Path) -> Option<Vec<OsString>> {
    let rd = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list directory; skipping");
            return None;
        }
    };

    let mut files = Vec::new();
    for entry in rd {
        let entry = match entry {
            Ok(en) => en,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot read directory entry; skipping");
                continue;
            }
        };
        let Ok(ft) = entry.file_type() else {
            continue;
        };
        if ft.is_dir() || (ft.is_symlink() && entry.path().is_dir()) {
            continue;
        }
        files.push(entry.file_name());
    }
    files.sort();
    Some(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn names(listing: &DirListing) -> Vec<String> {
        listing.files.iter().map(|f| f.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn pre_order_sorted_with_files_per_directory() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("b.jpg").touch().unwrap();
        root.child("a.jpg").touch().unwrap();
        root.child("z/1.jpg").touch().unwrap();
        root.child("m/2.jpg").touch().unwrap();
        root.child("m/inner/3.jpg").touch().unwrap();

        let seen: Vec<DirListing> = walk(root.path(), true, None).collect();
        let dirs: Vec<PathBuf> = seen.iter().map(|l| l.dir.clone()).collect();
        assert_eq!(
            dirs,
            vec![
                root.path().to_path_buf(),
                root.path().join("m"),
                root.path().join("m/inner"),
                root.path().join("z"),
            ]
        );
        assert_eq!(names(&seen[0]), vec!["a.jpg", "b.jpg"]);
        assert_eq!(names(&seen[2]), vec!["3.jpg"]);
    }

    #[test]
    fn non_recursive_yields_only_root() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("sub/1.jpg").touch().unwrap();
        let seen: Vec<DirListing> = walk(root.path(), false, None).collect();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].dir, root.path());
        assert!(seen[0].files.is_empty());
    }

    #[test]
    fn excluded_subtree_is_skipped() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("out/done.jpg").touch().unwrap();
        root.child("trip/1.jpg").touch().unwrap();
        let out = root.child("out");
        let seen: Vec<PathBuf> = walk(root.path(), true, Some(out.path())).map(|l| l.dir).collect();
        assert_eq!(seen, vec![root.path().to_path_buf(), root.path().join("trip")]);
    }

    #[cfg(unix)]
    #[test]
    fn directory_symlinks_are_neither_files_nor_descended() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("real/1.jpg").touch().unwrap();
        root.child("real/file.jpg").touch().unwrap();
        std::os::unix::fs::symlink(root.path().join("real"), root.path().join("loop")).unwrap();
        std::os::unix::fs::symlink(root.path().join("real/file.jpg"), root.path().join("alias.jpg"))
            .unwrap();

        let seen: Vec<DirListing> = walk(root.path(), true, None).collect();
        assert_eq!(seen.len(), 2);
        assert_eq!(names(&seen[0]), vec!["alias.jpg"]);
        assert_eq!(seen[1].dir, root.path().join("real"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_is_warned_and_skipped() {
        use std::io::{self, Write};
        use std::os::unix::fs::PermissionsExt;
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::layer::SubscriberExt;

        // root ignores permission bits
        if unsafe { libc::geteuid() } == 0 {
            eprintln!("Skipping: running as root");
            return;
        }

        #[derive(Clone)]
        struct Buf(Arc<Mutex<Vec<u8>>>);
        impl Write for Buf {
            fn write(&mut self, b: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(b);
                Ok(b.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let root = assert_fs::TempDir::new().unwrap();
        root.child("a/1.jpg").touch().unwrap();
        root.child("locked/2.jpg").touch().unwrap();
        root.child("locked/inner/3.jpg").touch().unwrap();
        let locked = root.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = {
            let buf = buf.clone();
            move || Buf(buf.clone())
        };
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .compact(),
        );
        let seen: Vec<PathBuf> = tracing::subscriber::with_default(subscriber, || {
            walk(root.path(), true, None).map(|l| l.dir).collect()
        });

        // restore so the temp dir can be removed
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(seen, vec![root.path().to_path_buf(), root.path().join("a")]);
        let logs = String::from_utf8_lossy(&buf.lock().unwrap()).into_owned();
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("locked"), "logs: {logs}");
    }
}
