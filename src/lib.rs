//! Core library for `photo_rename`.
//!
//! Prefixes files with the name of the directory that contains them, so an
//! export like `2020-07 Trip/005.jpg` becomes `2020-07 Trip/2020-07 Trip_005.jpg`.
//! The library holds the run configuration, the directory walker, the
//! relocate primitive, the interactive prompt and the traversal engine; the
//! binary only wires them to the command line, logging and stdio.

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod prompt;
pub mod walk;

pub use config::{LogLevel, RunConfig, path_has_symlink_ancestor};
pub use engine::{Action, ActionKind, Decision, DirectoryBatch, RunSummary, run};
pub use errors::RenameError;
pub use prompt::{Console, Response};
