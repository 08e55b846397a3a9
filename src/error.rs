//! # Error Module
//!
//! Errors that end a run. Failures on an individual file while walking a
//! directory are not represented here; they are reported and counted by the
//! processor, and the walk carries on.

use std::path::PathBuf;

/// Fatal errors for a `relicense` invocation.
#[derive(Debug, thiserror::Error)]
pub enum RelicenseError {
  /// The path given on the command line does not exist.
  #[error("Path '{}' does not exist", path.display())]
  PathNotFound { path: PathBuf },

  /// A single file was given whose extension is not on the allow-list.
  #[error("File '{}' is not a .{extension} file", path.display())]
  UnsupportedExtension { path: PathBuf, extension: String },
}
