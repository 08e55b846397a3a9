//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! Every call opens, uses and closes its own handle, so nothing stays open
//! between files or after an error.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads a whole file as UTF-8 text.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be opened or read, or if it is not valid UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Overwrites a file with new content.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `content` - Content to write to the file
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
