//! # Output Module
//!
//! This module centralizes all user-facing output for the relicense tool.
//! Status lines go to stdout, problems go to stderr. The wording is fixed;
//! color is added only when the stream supports it, so piped output stays
//! plain text.

use std::fmt::Display;
use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::report::{FileOutcome, ProcessingSummary};

/// Print the "Processing single file: ..." header.
pub fn print_single_file_start(path: &Path) {
  println!("Processing single file: {}", path.display());
}

/// Print the "Processing directory: ..." header.
pub fn print_directory_start(path: &Path) {
  println!("Processing directory: {}", path.display());
}

/// Print the per-file status line.
///
/// Failed files get no stdout line; their diagnostic already went to stderr
/// through [`print_file_error`].
pub fn print_file_outcome(path: &Path, outcome: FileOutcome) {
  match outcome {
    FileOutcome::Replaced => println!(
      "{} {}",
      "Replaced:".if_supports_color(Stream::Stdout, |s| s.green()),
      path.display()
    ),
    FileOutcome::NotReplaced => println!(
      "{} {} (no MIT license)",
      "Skipped:".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      path.display()
    ),
    FileOutcome::Failed => {}
  }
}

/// Print the final "Status: ..." line for single-file mode.
pub fn print_status(replaced: bool) {
  if replaced {
    println!("Status: {}", "Replaced".if_supports_color(Stream::Stdout, |s| s.green()));
  } else {
    println!(
      "Status: {}",
      "Not replaced".if_supports_color(Stream::Stdout, |s| s.yellow())
    );
  }
}

/// Print the summary line for directory mode.
pub fn print_summary(summary: &ProcessingSummary) {
  println!(
    "Summary: Checked {} files, replaced {} files",
    summary.checked, summary.replaced
  );
}

/// Report a read or write failure for one file on stderr.
pub fn print_file_error(path: &Path, error: &anyhow::Error) {
  eprintln!(
    "{} {}: {:#}",
    "Error processing".if_supports_color(Stream::Stderr, |s| s.red()),
    path.display(),
    error
  );
}

/// Report an error that ends the run on stderr.
pub fn print_fatal(error: &impl Display) {
  eprintln!(
    "{} {}",
    "ERROR:".if_supports_color(Stream::Stderr, |s| s.red().bold().to_string()),
    error
  );
}
