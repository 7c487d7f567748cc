//! Traversal engine.
//!
//! Walks the tree, asks once per directory what to do with its files, then
//! applies that decision to every file in the directory before moving on.
//! Dry runs print the same source/destination pairs as real runs; only the
//! framing of the line differs and nothing on disk changes.

use anyhow::{Result, anyhow};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

use crate::config::{RunConfig, SAMPLE_FILE_COUNT};
use crate::fs_ops::relocate;
use crate::prompt::{Console, Response};
use crate::walk::{DirListing, walk};

pub const RENAME_QUESTION: &str = "Would you like to rename files in this directory?";
const YES: &str = "yes";
const NO: &str = "no";
const YES_NO: [&str; 2] = [YES, NO];

/// What to do with one directory's files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Prefix with the directory name and place in the destination.
    RenameAndApply,
    /// Keep the name, place in the destination.
    MoveOnly,
    Skip,
    /// Stop the whole run before touching anything else.
    Quit,
}

/// Files of one visited directory, processed under a single [`Decision`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBatch {
    directory_path: PathBuf,
    file_names: Vec<OsString>,
    destination_path: PathBuf,
}

impl DirectoryBatch {
    /// `None` when the directory has no files.
    pub fn new(listing: DirListing, dest_dir: Option<&Path>) -> Option<Self> {
        if listing.files.is_empty() {
            return None;
        }
        let destination_path = dest_dir.map_or_else(|| listing.dir.clone(), Path::to_path_buf);
        Some(Self {
            directory_path: listing.dir,
            file_names: listing.files,
            destination_path,
        })
    }

    pub fn directory_path(&self) -> &Path {
        &self.directory_path
    }

    pub fn destination_path(&self) -> &Path {
        &self.destination_path
    }

    /// Up to the first three filenames, comma separated.
    pub fn sample(&self) -> String {
        self.file_names
            .iter()
            .take(SAMPLE_FILE_COUNT)
            .map(|f| f.to_string_lossy())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Rename,
    Move,
}

/// One planned (dry run) or performed relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    /// `<dir name>/<file>`, as printed.
    pub display_source: PathBuf,
    /// `<destination dir name>/<new name>`, as printed.
    pub display_destination: PathBuf,
}

impl Action {
    /// The line printed for this action.
    pub fn describe(&self, dry_run: bool) -> String {
        let src = self.display_source.display();
        let dst = self.display_destination.display();
        if dry_run {
            let verb = match self.kind {
                ActionKind::Rename => "Renames",
                ActionKind::Move => "Moves",
            };
            format!("{verb} {src} to {dst}")
        } else {
            format!("{src} --> {dst}")
        }
    }
}

/// What a run did (or, for a dry run, would have done).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub actions: Vec<Action>,
    pub directories_visited: usize,
    pub prompts: usize,
    pub directories_skipped: usize,
    pub quit: bool,
}

impl RunSummary {
    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind == kind).count()
    }

    /// `(source, destination)` pairs in the order they were produced.
    pub fn pairs(&self) -> Vec<(PathBuf, PathBuf)> {
        self.actions
            .iter()
            .map(|a| (a.source.clone(), a.destination.clone()))
            .collect()
    }
}

/// `<directory name>_<file name>`.
pub fn prefixed_name(dir_name: &OsStr, file_name: &OsStr) -> OsString {
    let mut name = OsString::with_capacity(dir_name.len() + 1 + file_name.len());
    name.push(dir_name);
    name.push("_");
    name.push(file_name);
    name
}

/// Final component of `dir`. Paths such as `.` or `photos/..` are resolved first.
pub fn dir_base_name(dir: &Path) -> Result<OsString> {
    if let Some(name) = dir.file_name() {
        return Ok(name.to_os_string());
    }
    let real = fs::canonicalize(dir)?;
    real.file_name()
        .map(OsStr::to_os_string)
        .ok_or_else(|| anyhow!("Cannot derive a name prefix from directory '{}'", dir.display()))
}

fn same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

/// Run the whole traversal.
pub fn run<R: BufRead, W: Write>(config: &RunConfig, console: &mut Console<R, W>) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for listing in walk(config.top_dir(), config.recursive(), config.dest_dir()) {
        summary.directories_visited += 1;
        let Some(batch) = DirectoryBatch::new(listing, config.dest_dir()) else {
            trace!("directory has no files; nothing to ask");
            continue;
        };

        let decision = decide(config, &batch, console, &mut summary)?;
        debug!(dir = %batch.directory_path.display(), ?decision, "decision");

        match decision {
            Decision::Quit => {
                info!(dir = %batch.directory_path.display(), "quit requested; stopping");
                summary.quit = true;
                break;
            }
            Decision::Skip => summary.directories_skipped += 1,
            Decision::RenameAndApply | Decision::MoveOnly => {
                apply(config, &batch, decision, console, &mut summary)?;
            }
        }
    }

    info!(
        renamed = summary.count(ActionKind::Rename),
        moved = summary.count(ActionKind::Move),
        directories = summary.directories_visited,
        skipped = summary.directories_skipped,
        dry_run = config.dry_run(),
        quit = summary.quit,
        "run finished"
    );
    Ok(summary)
}

/// Ask (unless prompting is off) what to do with `batch`.
fn decide<R: BufRead, W: Write>(
    config: &RunConfig,
    batch: &DirectoryBatch,
    console: &mut Console<R, W>,
    summary: &mut RunSummary,
) -> Result<Decision> {
    if config.skip_prompt() {
        return Ok(Decision::RenameAndApply);
    }

    console.write_line("")?;
    console.write_line(&format!("Directory {}", batch.directory_path.display()))?;
    console.write_line(&format!("Sample filenames: {}", batch.sample()))?;

    summary.prompts += 1;
    let answer = console.ask(RENAME_QUESTION, &YES_NO)?;
    if answer == Response::Quit {
        return Ok(Decision::Quit);
    }
    if answer.is(YES) {
        return Ok(Decision::RenameAndApply);
    }

    let Some(dest) = config.dest_dir() else {
        return Ok(Decision::Skip);
    };
    summary.prompts += 1;
    let question = format!(
        "Would you like to move the files to {} (but not rename)?",
        dest.display()
    );
    Ok(match console.ask(&question, &YES_NO)? {
        Response::Quit => Decision::Quit,
        r if r.is(YES) => Decision::MoveOnly,
        _ => Decision::Skip,
    })
}

fn apply<R: BufRead, W: Write>(
    config: &RunConfig,
    batch: &DirectoryBatch,
    decision: Decision,
    console: &mut Console<R, W>,
    summary: &mut RunSummary,
) -> Result<()> {
    let dir_name = dir_base_name(&batch.directory_path)?;
    let dest_name = dir_base_name(&batch.destination_path)?;
    let already_there = same_dir(&batch.directory_path, &batch.destination_path);

    for file in &batch.file_names {
        let (kind, new_name) = match decision {
            Decision::RenameAndApply => (ActionKind::Rename, prefixed_name(&dir_name, file)),
            Decision::MoveOnly => {
                if already_there {
                    trace!(file = ?file, "already in destination; leaving as is");
                    continue;
                }
                (ActionKind::Move, file.clone())
            }
            Decision::Skip | Decision::Quit => return Ok(()),
        };

        let action = Action {
            kind,
            source: batch.directory_path.join(file),
            destination: batch.destination_path.join(&new_name),
            display_source: Path::new(&dir_name).join(file),
            display_destination: Path::new(&dest_name).join(&new_name),
        };

        console.write_line(&action.describe(config.dry_run()))?;
        if !config.dry_run() {
            relocate(&action.source, &action.destination)?;
        }
        summary.actions.push(action);
    }
    Ok(())
}
