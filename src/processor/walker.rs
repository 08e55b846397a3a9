//! # Walker Module
//!
//! Recursive enumeration of candidate files under a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::file_filter::FileFilter;

/// Walks a directory tree and yields the files a filter accepts.
///
/// Directory symlinks are not followed. Any other symlink is treated like
/// a file, dangling ones included, so a broken link is reported by the
/// processor instead of vanishing from the counts. Entries that cannot be
/// read are logged and skipped so one bad directory never stops the walk.
pub struct Walker<'a> {
  filter: &'a dyn FileFilter,
}

impl<'a> Walker<'a> {
  /// Creates a walker that keeps only files accepted by `filter`.
  pub const fn new(filter: &'a dyn FileFilter) -> Self {
    Self { filter }
  }

  /// Returns an iterator over candidate files below `root`, in directory
  /// enumeration order.
  pub fn candidates(&self, root: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    debug!("Scanning directory: {}", root.display());

    WalkDir::new(root)
      .into_iter()
      .filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
          warn!("Error walking directory: {}", e);
          None
        }
      })
      .filter(is_candidate)
      .filter_map(move |entry| {
        let result = self.filter.should_process(entry.path());
        if result.should_process {
          Some(entry.into_path())
        } else {
          trace!(
            "Skipping: {} ({})",
            entry.path().display(),
            result.reason.as_deref().unwrap_or("Unknown reason")
          );
          None
        }
      })
  }
}

/// Regular files and symlinks that do not resolve to a directory.
fn is_candidate(entry: &DirEntry) -> bool {
  let file_type = entry.file_type();
  file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}
