//! Config module.
//! Provides the immutable run configuration, log verbosity levels, validation
//! and the path helpers used by logging.

pub mod paths;
pub mod types;
mod validate;

pub use paths::path_has_symlink_ancestor;
pub use types::{LogLevel, RunConfig};

/// Upper bound on the filenames shown in a directory banner.
pub const SAMPLE_FILE_COUNT: usize = 3;
