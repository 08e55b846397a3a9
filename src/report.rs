//! # Report Module
//!
//! Per-file outcomes and the counters printed at the end of a directory run.

use std::path::PathBuf;
use std::time::Duration;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// The license block was found and the file rewritten
  Replaced,
  /// The license block was not present; the file was left alone
  NotReplaced,
  /// Reading or writing the file failed; the file was left alone
  Failed,
}

impl FileOutcome {
  pub const fn is_replaced(self) -> bool {
    matches!(self, Self::Replaced)
  }
}

/// Information about a processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  /// Path to the file
  pub path: PathBuf,
  /// Outcome of processing the file
  pub outcome: FileOutcome,
}

/// Totals for a directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  /// Number of candidate files examined
  pub checked: usize,
  /// Number of files rewritten
  pub replaced: usize,
  /// Number of files that could not be read or written (counted as not replaced)
  pub failed: usize,
  /// Wall time spent processing
  pub elapsed: Duration,
}

impl ProcessingSummary {
  /// Builds a summary from individual file reports.
  pub fn from_reports(reports: &[FileReport], elapsed: Duration) -> Self {
    let mut summary = Self {
      elapsed,
      ..Self::default()
    };
    for report in reports {
      summary.record(report.outcome);
    }
    summary
  }

  /// Adds one file outcome to the totals.
  pub const fn record(&mut self, outcome: FileOutcome) {
    self.checked += 1;
    match outcome {
      FileOutcome::Replaced => self.replaced += 1,
      FileOutcome::NotReplaced => {}
      FileOutcome::Failed => self.failed += 1,
    }
  }

  /// Files that were examined but not rewritten, failures included.
  pub const fn not_replaced(&self) -> usize {
    self.checked - self.replaced
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn report(name: &str, outcome: FileOutcome) -> FileReport {
    FileReport {
      path: PathBuf::from(name),
      outcome,
    }
  }

  #[test]
  fn test_summary_from_reports() {
    let reports = vec![
      report("a.go", FileOutcome::Replaced),
      report("b.go", FileOutcome::NotReplaced),
      report("c.go", FileOutcome::Failed),
      report("d.go", FileOutcome::Replaced),
    ];

    let summary = ProcessingSummary::from_reports(&reports, Duration::from_millis(5));
    assert_eq!(summary.checked, 4);
    assert_eq!(summary.replaced, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.not_replaced(), 2);
    assert_eq!(summary.elapsed, Duration::from_millis(5));
  }

  #[test]
  fn test_empty_summary() {
    let summary = ProcessingSummary::from_reports(&[], Duration::ZERO);
    assert_eq!(summary, ProcessingSummary::default());
  }
}
