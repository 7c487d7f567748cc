//! CLI definition and parsing.
//! Defines Args and converts them into a validated RunConfig.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Logging flags never affect what gets renamed.

use anyhow::Result;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{LogLevel, RunConfig};

/// Rename files to include their containing directory's name.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename photo files to include the containing directory name"
)]
pub struct Args {
    /// Top directory to begin processing.
    #[arg(value_name = "TOPDIR", value_hint = ValueHint::DirPath)]
    pub topdir: PathBuf,

    /// Process subdirectories recursively.
    #[arg(short = 'r', long, help = "Process subdirectories recursively")]
    pub recursive: bool,

    /// Dry run: print the actions without taking them.
    #[arg(
        short = 't',
        long,
        help = "Print out a test run without taking action"
    )]
    pub testrun: bool,

    /// Skip the per-directory confirmation.
    #[arg(
        short = 'y',
        long,
        help = "Don't prompt for confirmation for each directory/subdirectory"
    )]
    pub noprompt: bool,

    /// Put renamed/moved files here instead of renaming in place.
    #[arg(
        long,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Move renamed files into this directory instead of renaming in place"
    )]
    pub newdir: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also append logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > default.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level.clone().unwrap_or_default()
    }

    /// Validate the paths and build the immutable run configuration.
    pub fn run_config(&self) -> Result<RunConfig> {
        RunConfig::new(
            &self.topdir,
            self.recursive,
            self.noprompt,
            self.testrun,
            self.newdir.clone(),
        )
    }
}

pub fn parse() -> Args {
    Args::parse()
}
