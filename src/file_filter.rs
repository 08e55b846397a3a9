//! # File Filter Module
//!
//! This module contains components for deciding which files the processor
//! should look at. The only criterion is the file extension.

use std::path::Path;

use tracing::trace;

/// The extension files must carry to be processed, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "go";

/// Result of a file filtering operation.
#[derive(Debug)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter {
  /// Determines whether a file should be processed.
  ///
  /// # Parameters
  ///
  /// * `path` - The path to the file to check
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter that only lets through files with an allowed extension.
///
/// Extensions are compared case-insensitively, so `main.GO` passes a `go`
/// allow-list.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  allowed: Vec<String>,
}

impl ExtensionFilter {
  /// Creates a filter from a list of extensions.
  ///
  /// Leading dots are stripped and entries are lowercased.
  pub fn new<I, S>(extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let allowed = extensions
      .into_iter()
      .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
      .filter(|ext| !ext.is_empty())
      .collect();
    Self { allowed }
  }

  /// Human readable form of the allow-list, e.g. `go` or `go, mod`.
  pub fn describe(&self) -> String {
    self.allowed.join(", ")
  }

  /// Returns `true` if the path's extension is on the allow-list.
  pub fn is_allowed(&self, path: &Path) -> bool {
    path
      .extension()
      .map(|ext| ext.to_string_lossy().to_lowercase())
      .is_some_and(|ext| self.allowed.iter().any(|allowed| *allowed == ext))
  }
}

impl Default for ExtensionFilter {
  fn default() -> Self {
    Self::new([DEFAULT_EXTENSION])
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.is_allowed(path) {
      FilterResult::process()
    } else {
      trace!("Skipping: {} (extension not allowed)", path.display());
      FilterResult::skip(format!("Extension is not one of: {}", self.describe()))
    }
  }
}
