//! Core configuration types.
//! - RunConfig holds the settings for a single run, fixed once validated.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for one traversal. Built through [`RunConfig::new`], which
/// validates the paths; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub(super) top_dir: PathBuf,
    pub(super) recursive: bool,
    pub(super) skip_prompt: bool,
    pub(super) dry_run: bool,
    pub(super) dest_dir: Option<PathBuf>,
}

impl RunConfig {
    /// Root of the walk.
    pub fn top_dir(&self) -> &Path {
        &self.top_dir
    }

    /// Descend into subdirectories; otherwise only `top_dir` is visited.
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Treat every directory as if the user answered "yes".
    pub fn skip_prompt(&self) -> bool {
        self.skip_prompt
    }

    /// Print actions but do not modify the filesystem.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Where renamed/moved files land. `None` renames in place.
    pub fn dest_dir(&self) -> Option<&Path> {
        self.dest_dir.as_deref()
    }
}
