//! Filesystem collaborator: the relocate primitive and io-error hints.

mod helpers;
mod relocate;

pub use helpers::{describe_io_error, io_error_with_help};
pub use relocate::relocate;
