//! # Processor Module
//!
//! This module contains the core functionality for rewriting license headers
//! in a single file or across a directory tree.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - Literal replacement of the license block
//! - [`walker`] - Recursive enumeration of candidate files
//!
//! The [`Processor`] struct is the main entry point for all file operations,
//! orchestrating the submodules to provide a cohesive API. Files are handled
//! strictly one at a time, and each file is read, rewritten and closed
//! before the next one is opened.

mod content_transformer;
mod file_io;
mod walker;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
pub use content_transformer::ContentTransformer;
pub use file_io::FileIO;
use tracing::{debug, trace};
pub use walker::Walker;

use crate::error::RelicenseError;
use crate::file_filter::{ExtensionFilter, FileFilter};
use crate::license::LicenseSwap;
use crate::output;
use crate::report::{FileOutcome, FileReport, ProcessingSummary};

/// What a [`Processor::process_path`] run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
  /// A single file was processed
  File(FileReport),
  /// A directory tree was processed
  Directory(ProcessingSummary),
}

/// Processor for replacing license headers.
///
/// The `Processor` is responsible for:
/// - Rewriting a single file whose content contains the source license block
/// - Walking a directory and rewriting every file the extension filter allows
/// - Reporting one status line per file and a summary per directory
pub struct Processor {
  /// Content transformer holding the license pair
  content_transformer: ContentTransformer,

  /// Allow-list of file extensions
  extension_filter: ExtensionFilter,

  /// Whether to print status lines while processing
  print_status: bool,
}

impl Default for Processor {
  fn default() -> Self {
    Self::new(LicenseSwap::default(), ExtensionFilter::default())
  }
}

impl Processor {
  /// Creates a new processor for the given license pair and allow-list.
  ///
  /// Status lines are printed to stdout; use [`Processor::quiet`] to turn
  /// them off.
  pub const fn new(swap: LicenseSwap, extension_filter: ExtensionFilter) -> Self {
    Self {
      content_transformer: ContentTransformer::new(swap),
      extension_filter,
      print_status: true,
    }
  }

  /// Disables per-file and summary status lines.
  ///
  /// Error diagnostics for failed files are still written to stderr.
  pub const fn quiet(mut self) -> Self {
    self.print_status = false;
    self
  }

  /// Replaces the license block in a single file.
  ///
  /// Read and write failures are reported on stderr and count as "not
  /// replaced", so callers walking many files can simply carry on.
  ///
  /// # Returns
  ///
  /// `true` if the block was found and the file rewritten, `false` otherwise.
  pub fn replace(&self, path: &Path) -> bool {
    self.replace_file(path).is_replaced()
  }

  /// Replaces the license block in a single file, propagating I/O errors.
  ///
  /// The file is written only when the source block is present, so files
  /// without it keep their exact bytes and modification time.
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be read as UTF-8 text or cannot be written.
  pub fn try_replace(&self, path: &Path) -> Result<FileOutcome> {
    let content = FileIO::read_full_content(path)?;

    let Some(new_content) = self.content_transformer.replace_license(&content) else {
      trace!("No license block in {}", path.display());
      return Ok(FileOutcome::NotReplaced);
    };

    debug!(
      "Replacing {} license block(s) in {}",
      self.content_transformer.count_occurrences(&content),
      path.display()
    );
    FileIO::write_file(path, &new_content)?;

    Ok(FileOutcome::Replaced)
  }

  /// Processes one file, prints its status line and returns the outcome.
  fn replace_file(&self, path: &Path) -> FileOutcome {
    let outcome = match self.try_replace(path) {
      Ok(outcome) => outcome,
      Err(e) => {
        output::print_file_error(path, &e);
        FileOutcome::Failed
      }
    };

    if self.print_status {
      output::print_file_outcome(path, outcome);
    }
    outcome
  }

  /// Processes every allowed file below `root`.
  ///
  /// Failures on individual files are reported and counted; they never stop
  /// the walk.
  ///
  /// # Returns
  ///
  /// The number of files checked and replaced.
  pub fn process_directory(&self, root: &Path) -> ProcessingSummary {
    let start_time = Instant::now();
    let walker = Walker::new(&self.extension_filter);

    let reports: Vec<FileReport> = walker
      .candidates(root)
      .map(|path| {
        let outcome = self.replace_file(&path);
        FileReport { path, outcome }
      })
      .collect();
    let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

    debug!(
      "Checked {} files, replaced {}, left {} unchanged ({} failed) in {}ms",
      summary.checked,
      summary.replaced,
      summary.not_replaced(),
      summary.failed,
      summary.elapsed.as_millis()
    );

    if self.print_status {
      output::print_summary(&summary);
    }
    summary
  }

  /// Processes a path that may be a single file or a directory.
  ///
  /// Only a regular file (or a symlink to one) takes the single-file route.
  /// Anything else that exists is walked as a directory, so special files
  /// such as FIFOs are never opened and yield an empty summary.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  /// - The path does not exist
  /// - The path is a file whose extension is not on the allow-list
  pub fn process_path(&self, path: &Path) -> Result<RunOutcome, RelicenseError> {
    if !path.exists() {
      return Err(RelicenseError::PathNotFound {
        path: path.to_path_buf(),
      });
    }

    if !path.is_file() {
      if self.print_status {
        output::print_directory_start(path);
      }
      return Ok(RunOutcome::Directory(self.process_directory(path)));
    }

    let filter_result = self.extension_filter.should_process(path);
    if !filter_result.should_process {
      return Err(RelicenseError::UnsupportedExtension {
        path: path.to_path_buf(),
        extension: self.extension_filter.describe(),
      });
    }

    if self.print_status {
      output::print_single_file_start(path);
    }
    let outcome = self.replace_file(path);
    if self.print_status {
      output::print_status(outcome.is_replaced());
    }

    Ok(RunOutcome::File(FileReport {
      path: PathBuf::from(path),
      outcome,
    }))
  }
}
